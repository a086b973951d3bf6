use csv::{
    ReaderBuilder,
    StringRecord,
};

use crate::core::{
    KarteiError,
    Record,
};

// Accepted header names per column, lowercase. The source/target aliases keep
// the loader compatible with both the original German/Spanish decks and
// generic ones.
const UNIT_HEADERS: &[&str] = &["unit"];
const SOURCE_HEADERS: &[&str] = &["german", "source"];
const TARGET_HEADERS: &[&str] = &["spanish", "target"];
const GRADE_HEADERS: &[&str] = &["grade"];

struct ColumnMap {
    unit: usize,
    source: usize,
    target: usize,
    grade: Option<usize>,
}

/// Parses deck text into records, in input row order.
///
/// Quoted fields, embedded `""` escapes, CRLF line endings, a UTF-8 BOM and
/// blank trailing lines are all tolerated. Rows that are malformed or missing
/// a required value are dropped silently; the only hard error is a header row
/// without the required column names.
pub fn parse_records(text: &str) -> Result<Vec<Record>, KarteiError> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = map_columns(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            // Best-effort policy: a row the tokenizer rejects is lost, not fatal.
            Err(_) => continue,
        };

        if let Some(record) = record_from_row(&row, &columns) {
            records.push(record);
        }
    }

    Ok(records)
}

fn map_columns(headers: &StringRecord) -> Result<ColumnMap, KarteiError> {
    let find = |names: &[&str]| {
        headers.iter().position(|header| {
            let header = header.trim().trim_start_matches('\u{feff}').to_lowercase();
            names.contains(&header.as_str())
        })
    };

    Ok(ColumnMap {
        unit: find(UNIT_HEADERS).ok_or(KarteiError::MissingColumn("unit"))?,
        source: find(SOURCE_HEADERS).ok_or(KarteiError::MissingColumn("german/source"))?,
        target: find(TARGET_HEADERS).ok_or(KarteiError::MissingColumn("spanish/target"))?,
        grade: find(GRADE_HEADERS),
    })
}

fn record_from_row(row: &StringRecord, columns: &ColumnMap) -> Option<Record> {
    let field = |index: usize| row.get(index).map(str::trim).filter(|value| !value.is_empty());

    Some(Record {
        unit: field(columns.unit)?.to_string(),
        source: field(columns.source)?.to_string(),
        target: field(columns.target)?.to_string(),
        grade: columns.grade.and_then(|index| field(index)).map(str::to_string),
    })
}
