//! Report generation for batch results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::BatchResult;

/// CSV exporter for batch results.
///
/// One row per dataset with columns `set_size`, `unique_members`,
/// `required_sets`, `universe_size`, `set_count` and `solve_time_ms`.
///
/// # Example
///
/// ```
/// use setcover_benchmark::{BatchResult, CsvExporter};
///
/// let csv = CsvExporter::to_string(&BatchResult::new());
/// assert_eq!(
///     csv,
///     "set_size,unique_members,required_sets,universe_size,set_count,solve_time_ms\n"
/// );
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports a batch result to a CSV string.
    pub fn to_string(result: &BatchResult) -> String {
        let mut output = String::new();

        writeln!(
            output,
            "set_size,unique_members,required_sets,universe_size,set_count,solve_time_ms"
        )
        .unwrap();

        for row in &result.results {
            writeln!(
                output,
                "{},{},{},{},{},{}",
                row.set_size,
                row.unique_members,
                row.required_sets,
                row.universe_size,
                row.set_count,
                row.solve_time_ms(),
            )
            .unwrap();
        }

        output
    }

    /// Exports a batch result to a CSV file.
    pub fn to_file(result: &BatchResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes a batch result as CSV to a writer.
    pub fn write<W: Write>(result: &BatchResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// Markdown report generator.
///
/// Summarises a batch with timing figures and a grid of required sets:
/// one row per set size, one column per member pool size.
///
/// # Example
///
/// ```
/// use setcover_benchmark::{BatchResult, MarkdownReport};
///
/// let md = MarkdownReport::to_string(&BatchResult::new());
/// assert!(md.contains("# Set Cover Batch"));
/// assert!(md.contains("*No datasets solved.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(result: &BatchResult) -> String {
        let mut output = String::new();

        writeln!(output, "# Set Cover Batch").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "- **Datasets**: {}", result.len()).unwrap();
        if !result.skipped.is_empty() {
            writeln!(output, "- **Skipped**: {}", result.skipped.join(", ")).unwrap();
        }
        writeln!(output).unwrap();

        writeln!(output, "## Summary").unwrap();
        writeln!(output).unwrap();

        let (Some(largest), Some(smallest)) = (result.largest_cover(), result.smallest_cover())
        else {
            writeln!(output, "*No datasets solved.*").unwrap();
            return output;
        };

        writeln!(output, "| Metric | Value |").unwrap();
        writeln!(output, "|--------|-------|").unwrap();
        writeln!(
            output,
            "| Largest Cover | {} sets ({}) |",
            largest.required_sets, largest.file_name
        )
        .unwrap();
        writeln!(
            output,
            "| Smallest Cover | {} sets ({}) |",
            smallest.required_sets, smallest.file_name
        )
        .unwrap();
        writeln!(
            output,
            "| Total Time | {:.2} ms |",
            result.total_solve_time().as_secs_f64() * 1000.0
        )
        .unwrap();
        writeln!(
            output,
            "| Avg Time | {:.2} ms |",
            result.avg_solve_time().as_secs_f64() * 1000.0
        )
        .unwrap();
        writeln!(
            output,
            "| Max Time | {:.2} ms |",
            result.max_solve_time().as_secs_f64() * 1000.0
        )
        .unwrap();
        writeln!(output).unwrap();

        // Required sets by grid point; `-` marks combinations with no dataset.
        let pools = result.unique_members();
        writeln!(output, "## Required Sets").unwrap();
        writeln!(output).unwrap();
        write!(output, "| Set Size |").unwrap();
        for pool in &pools {
            write!(output, " {pool} |").unwrap();
        }
        writeln!(output).unwrap();
        write!(output, "|----------|").unwrap();
        for _ in &pools {
            write!(output, "---|").unwrap();
        }
        writeln!(output).unwrap();
        for size in result.set_sizes() {
            write!(output, "| {size} |").unwrap();
            for &pool in &pools {
                match result.get(size, pool) {
                    Some(row) => write!(output, " {} |", row.required_sets).unwrap(),
                    None => write!(output, " - |").unwrap(),
                }
            }
            writeln!(output).unwrap();
        }
        writeln!(output).unwrap();

        writeln!(output, "## Dataset Details").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Dataset | Sets | Universe | Required | Time (ms) |"
        )
        .unwrap();
        writeln!(
            output,
            "|---------|------|----------|----------|-----------|"
        )
        .unwrap();
        for row in &result.results {
            writeln!(
                output,
                "| {} | {} | {} | {} | {:.2} |",
                row.file_name,
                row.set_count,
                row.universe_size,
                row.required_sets,
                row.solve_time.as_secs_f64() * 1000.0,
            )
            .unwrap();
        }

        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(result: &BatchResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes a Markdown report to a writer.
    pub fn write<W: Write>(result: &BatchResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::result::DatasetResult;

    fn batch() -> BatchResult {
        let mut batch = BatchResult::new();
        for (set_size, pool, required) in [(1, 10, 10), (1, 20, 20), (5, 10, 3)] {
            batch.add(DatasetResult {
                file_name: format!("set_data_{set_size}_{pool}.csv"),
                set_size,
                unique_members: pool,
                set_count: 100,
                universe_size: pool,
                required_sets: required,
                solve_time: Duration::from_millis(12),
            });
        }
        batch
    }

    #[test]
    fn test_csv_rows() {
        let csv = CsvExporter::to_string(&batch());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "1,10,10,10,100,12");
        assert_eq!(lines[3], "5,10,3,10,100,12");
    }

    #[test]
    fn test_markdown_grid() {
        let md = MarkdownReport::to_string(&batch());

        assert!(md.contains("| Set Size | 10 | 20 |"));
        assert!(md.contains("| 1 | 10 | 20 |"));
        assert!(md.contains("| 5 | 3 | - |"));
        assert!(md.contains("| Largest Cover | 20 sets (set_data_1_20.csv) |"));
    }

    #[test]
    fn test_markdown_lists_skipped_files() {
        let mut batch = batch();
        batch.skipped.push("notes.csv".to_string());

        let md = MarkdownReport::to_string(&batch);
        assert!(md.contains("- **Skipped**: notes.csv"));
    }
}
