//! CSV export of a quote history.

use crate::data::provider::QuoteError;
use crate::domain::QuoteHistory;

/// Column header, fixed for downstream consumers.
pub const CSV_HEADER: [&str; 10] = [
    "Date",
    "Open",
    "Close",
    "Change_Amount",
    "Change_Percent",
    "Low",
    "High",
    "Volume",
    "Amount",
    "Turnover_Rate",
];

/// Render the history as CSV, one record per entry in history order.
pub fn to_csv(history: &QuoteHistory) -> Result<String, QuoteError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(CSV_HEADER)
        .map_err(|e| QuoteError::Export(e.to_string()))?;

    for (date, row) in history.iter() {
        let fields = row.as_fields();
        let mut record = Vec::with_capacity(CSV_HEADER.len());
        record.push(date);
        record.extend(fields);
        wtr.write_record(&record)
            .map_err(|e| QuoteError::Export(e.to_string()))?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| QuoteError::Export(e.to_string()))?;
    String::from_utf8(data).map_err(|e| QuoteError::Export(e.to_string()))
}

/// Download filename offered to the browser for an export.
pub fn csv_filename(ticker: &str) -> String {
    format!("stock_data_{ticker}.csv")
}
