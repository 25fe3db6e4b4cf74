use crate::domain::stats::{LocationStats, TRACKED_BEDROOMS};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

/// One row per neighborhood: totals, range, and the per-bedroom averages.
pub fn export_market_xlsx(stats: &[LocationStats]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let mut headers = vec![
        "Location".to_string(),
        "Listings".to_string(),
        "Average Price".to_string(),
        "Min Price".to_string(),
        "Max Price".to_string(),
    ];
    for beds in TRACKED_BEDROOMS {
        headers.push(format!("{beds}-Bed Avg"));
    }

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, stat) in stats.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &stat.location)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write location: {e}")))?;
        worksheet
            .write_number(r, 1, stat.count as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write count: {e}")))?;
        worksheet
            .write_number(r, 2, stat.average_price.round())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write average: {e}")))?;
        worksheet
            .write_number(r, 3, stat.min_price)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write min: {e}")))?;
        worksheet
            .write_number(r, 4, stat.max_price)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write max: {e}")))?;

        for (offset, beds) in TRACKED_BEDROOMS.enumerate() {
            let col = (5 + offset) as u16;
            if let Some(price) = stat.price_by_bedroom.get(&beds) {
                worksheet.write_number(r, col, price.round()).map_err(|e| {
                    ServerError::XlsxError(format!("Failed to write {beds}-bed avg: {e}"))
                })?;
            }
        }
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to build workbook: {e}")))?;

    xlsx_response(buffer, "accra-market-stats.xlsx")
}
