// src/db/searches.rs
//
// Saved searches: the one thing this app persists. An estimate the user
// saved, with enough context to re-render it later.

use crate::db::connection::Database;
use crate::domain::estimate::{Confidence, PriceEstimate};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::params;

#[derive(Debug, Clone)]
pub struct SavedSearch {
    pub id: i64,
    pub location: String,
    pub bedrooms: u32,
    pub estimate: PriceEstimate,
    pub saved_at: NaiveDateTime,
}

pub fn save_search(
    db: &Database,
    location: &str,
    bedrooms: u32,
    estimate: &PriceEstimate,
) -> Result<(), ServerError> {
    let now = chrono::Utc::now().naive_utc();

    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO saved_searches
                (location, bedrooms, low, average, high, count, confidence, saved_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                location,
                bedrooms,
                estimate.low,
                estimate.average,
                estimate.high,
                estimate.count as i64,
                estimate.confidence.as_str(),
                now,
            ],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}

pub fn list_searches(db: &Database) -> Result<Vec<SavedSearch>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT id, location, bedrooms, low, average, high, count, confidence, saved_at
                FROM saved_searches
                ORDER BY saved_at DESC, id DESC
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                let confidence: String = row.get(7)?;
                Ok(SavedSearch {
                    id: row.get(0)?,
                    location: row.get(1)?,
                    bedrooms: row.get::<_, i64>(2)? as u32,
                    estimate: PriceEstimate {
                        low: row.get(3)?,
                        average: row.get(4)?,
                        high: row.get(5)?,
                        count: row.get::<_, i64>(6)? as usize,
                        confidence: parse_confidence(&confidence),
                    },
                    saved_at: row.get(8)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
        }
        Ok(out)
    })
}

pub fn delete_search(db: &Database, id: i64) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute("DELETE FROM saved_searches WHERE id = ?1", params![id])
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}

pub fn clear_searches(db: &Database) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute("DELETE FROM saved_searches", [])
            .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
}

// Rows written by us always hold a valid label; anything else degrades to low.
fn parse_confidence(s: &str) -> Confidence {
    match s {
        "high" => Confidence::High,
        "medium" => Confidence::Medium,
        _ => Confidence::Low,
    }
}
