//! Membership CSV loader.
//!
//! A dataset is a table of `(set_id, member_id)` rows, one row per
//! membership. Both columns are read as strings so `"007"` and `"7"` stay
//! distinct identifiers.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use setcover_core::SetFamily;
use tracing::debug;

use crate::error::{DatasetError, Result};

/// Header of the set identifier column.
pub const SET_ID_COLUMN: &str = "set_id";
/// Header of the member identifier column.
pub const MEMBER_ID_COLUMN: &str = "member_id";

/// Loads a dataset file into a set family.
pub fn load_family(path: impl AsRef<Path>) -> Result<SetFamily<String, String>> {
    let file = File::open(path.as_ref())?;
    let family = read_family(file)?;
    debug!(
        event = "dataset_loaded",
        path = %path.as_ref().display(),
        set_count = family.len() as u64,
        membership_count = family.membership_count() as u64,
    );
    Ok(family)
}

/// Reads membership rows from any reader into a set family.
///
/// Columns are located by header name, so their order does not matter and
/// extra columns are ignored. Repeated rows collapse into one membership.
///
/// # Example
///
/// ```
/// use setcover_io::read_family;
///
/// let data = "set_id,member_id\nA,1\nA,2\nB,2\n";
/// let family = read_family(data.as_bytes()).unwrap();
///
/// assert_eq!(family.len(), 2);
/// assert_eq!(family.universe_size(), 2);
/// ```
pub fn read_family<R: Read>(reader: R) -> Result<SetFamily<String, String>> {
    let mut csv = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv.headers()?.clone();
    let set_column = column_index(&headers, SET_ID_COLUMN)?;
    let member_column = column_index(&headers, MEMBER_ID_COLUMN)?;

    let mut family = SetFamily::new();
    for record in csv.records() {
        let record = record?;
        let set_id = identifier(&record, set_column, SET_ID_COLUMN)?;
        let member_id = identifier(&record, member_column, MEMBER_ID_COLUMN)?;
        family.add_member(set_id.to_string(), member_id.to_string());
    }
    Ok(family)
}

fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(DatasetError::MissingColumn(name))
}

fn identifier<'r>(record: &'r StringRecord, column: usize, name: &'static str) -> Result<&'r str> {
    match record.get(column) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DatasetError::EmptyIdentifier {
            line: record.position().map_or(0, |position| position.line()),
            column: name,
        }),
    }
}
