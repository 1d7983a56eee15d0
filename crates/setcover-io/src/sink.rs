//! Cover output.

use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use setcover_core::{Cover, SetId};

use crate::error::Result;

/// Writes a cover to a CSV file with columns `rank,set_id`.
pub fn write_cover<I: SetId + Display>(path: impl AsRef<Path>, cover: &Cover<I>) -> Result<()> {
    let file = File::create(path)?;
    write_cover_to(file, cover)
}

/// Writes a cover as CSV to a writer, one row per set in selection order.
///
/// # Example
///
/// ```
/// use setcover_core::Cover;
/// use setcover_io::write_cover_to;
///
/// let cover = Cover::from(vec!["A", "C"]);
/// let mut out = Vec::new();
/// write_cover_to(&mut out, &cover).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "rank,set_id\n0,A\n1,C\n");
/// ```
pub fn write_cover_to<I: SetId + Display, W: Write>(writer: W, cover: &Cover<I>) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["rank", "set_id"])?;
    for (rank, id) in cover.iter().enumerate() {
        csv.write_record([rank.to_string(), id.to_string()])?;
    }
    csv.flush()?;
    Ok(())
}
