//! CSV rendering of a record view.
//!
//! Every text value is quoted with inner quotes doubled, prices are bare
//! two-decimal numbers. Pure text in, text out.

use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::utils::money::format_price;
use csv::{QuoteStyle, WriterBuilder};

pub const CSV_HEADERS: [&str; 6] = [
    "Recorded At",
    "Service At",
    "Item",
    "Price",
    "Technician",
    "Notes",
];

/// Render `records` as a CSV document, header first, rows joined by `\n`.
/// An empty view yields the header line only.
pub fn to_csv<'a, I>(records: I) -> AppResult<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let header = CSV_HEADERS
        .iter()
        .map(|h| quote(h))
        .collect::<AppResult<Vec<_>>>()?;

    let mut lines = vec![header.join(",")];

    for r in records {
        lines.push(row(r)?);
    }

    Ok(lines.join("\n"))
}

fn row(r: &Record) -> AppResult<String> {
    // il prezzo resta senza virgolette
    Ok([
        quote(&r.recorded_str())?,
        quote(&r.service_str())?,
        quote(&r.item)?,
        format_price(r.price),
        quote(&r.technician)?,
        quote(&r.notes)?,
    ]
    .join(","))
}

/// Campo di testo sempre tra virgolette: `He said "hi"` → `"He said ""hi"""`.
///
/// A single `csv::Writer` applies one quote style to every column, so each
/// text field goes through its own always-quoting writer.
pub fn quote(value: &str) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    wtr.write_field(value)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
