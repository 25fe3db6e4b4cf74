// src/domain/normalize.rs
//
// Maps the free-text location strings coming out of the scrapers onto
// canonical neighborhood names. Lookup is an alias table keyed by the
// lowercased, trimmed input; anything unknown falls back to title-casing.
//
// Note: the estimator and aggregator compare raw location strings. This
// table is only applied as an opt-in pre-pass at dataset load (see
// `dataset::normalize_locations`).

use crate::errors::ServerError;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

/// Alias -> canonical neighborhood table. Data-driven so new spelling
/// variants can be added without touching code.
#[derive(Debug, Clone)]
pub struct LocationAliases {
    table: HashMap<String, String>,
}

impl LocationAliases {
    pub fn new(table: HashMap<String, String>) -> Self {
        // Keys must be lowercase for lookup to work regardless of how the
        // table file was written.
        let table = table
            .into_iter()
            .map(|(k, v)| (k.trim().to_lowercase(), v))
            .collect();
        Self { table }
    }

    /// Load a replacement table from a JSON object of alias -> canonical.
    pub fn from_json_file(path: &str) -> Result<Self, ServerError> {
        let file = File::open(path)
            .map_err(|e| ServerError::DataError(format!("Failed to open {path}: {e}")))?;
        let table: HashMap<String, String> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ServerError::DataError(format!("Failed to parse {path}: {e}")))?;
        Ok(Self::new(table))
    }

    /// Canonicalize one raw location string. Total: always returns a name.
    pub fn normalize(&self, raw: &str) -> String {
        let key = raw.trim().to_lowercase();
        if let Some(canonical) = self.table.get(&key) {
            return canonical.clone();
        }
        title_case(raw.trim())
    }
}

impl Default for LocationAliases {
    fn default() -> Self {
        // Spelling variants, sub-areas and abbreviations seen in the
        // scraped Greater Accra data.
        let entries: &[(&str, &str)] = &[
            ("cantonment", "Cantonments"),
            ("cantoments", "Cantonments"),
            ("cantonments accra", "Cantonments"),
            ("spintex road", "Spintex"),
            ("spintex rd", "Spintex"),
            ("spintex accra", "Spintex"),
            ("east-legon", "East Legon"),
            ("eastlegon", "East Legon"),
            ("adjiringanor", "East Legon"),
            ("american house", "East Legon"),
            ("east legon accra", "East Legon"),
            ("airport residential", "Airport Residential Area"),
            ("airport res", "Airport Residential Area"),
            ("airport area", "Airport Residential Area"),
            ("osu re", "Osu"),
            ("oxford street", "Osu"),
            ("osu accra", "Osu"),
            ("la bone", "Labone"),
            ("labadi", "La"),
            ("tse addo", "Tse Addo"),
            ("la tse addo", "Tse Addo"),
            ("teshie-nungua", "Teshie"),
            ("nungua barrier", "Nungua"),
            ("sakumono estates", "Sakumono"),
            ("ashaley botwe school junction", "Ashaley Botwe"),
            ("madina estate", "Madina"),
            ("adentan", "Adenta"),
            ("adenta municipality", "Adenta"),
            ("atomic junction", "Haatso"),
            ("dome pillar 2", "Dome"),
            ("mile 7", "Achimota"),
            ("achimota mile 7", "Achimota"),
            ("abelenkpe", "Abelemkpe"),
            ("abeka lapaz", "Lapaz"),
            ("lapaz new market", "Lapaz"),
            ("dansoman estates", "Dansoman"),
            ("dansoman last stop", "Dansoman"),
            ("mccarthy hills", "McCarthy Hill"),
            ("weija junction", "Weija"),
            ("kasoa new town", "Kasoa"),
        ];
        let table = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::new(table)
    }
}

/// Capitalize each whitespace-delimited word, lowercasing the rest.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
