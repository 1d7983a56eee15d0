//! Dataset file naming: `set_data_{set_size}_{unique_members}.csv`.

use std::fmt;
use std::str::FromStr;

use crate::error::DatasetError;

const PREFIX: &str = "set_data";
const EXTENSION: &str = ".csv";

/// Parameters encoded in a dataset file name.
///
/// Only the last two `_`-separated fields are significant when parsing, so
/// any prefix is accepted.
///
/// # Example
///
/// ```
/// use setcover_io::DatasetName;
///
/// let name: DatasetName = "set_data_20_1000.csv".parse().unwrap();
/// assert_eq!(name.set_size, 20);
/// assert_eq!(name.unique_members, 1000);
/// assert_eq!(name.to_string(), "set_data_20_1000.csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatasetName {
    /// Members sampled into each set.
    pub set_size: usize,
    /// Size of the member pool.
    pub unique_members: usize,
}

impl DatasetName {
    /// Creates a dataset name.
    pub fn new(set_size: usize, unique_members: usize) -> Self {
        Self {
            set_size,
            unique_members,
        }
    }

    /// Returns the canonical file name.
    pub fn file_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PREFIX}_{}_{}{EXTENSION}",
            self.set_size, self.unique_members
        )
    }
}

impl FromStr for DatasetName {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DatasetError::InvalidFileName(s.to_string());
        let stem = s.strip_suffix(EXTENSION).ok_or_else(invalid)?;
        let mut fields = stem.rsplitn(3, '_');
        let unique_members = fields.next().and_then(|f| f.parse().ok());
        let set_size = fields.next().and_then(|f| f.parse().ok());
        match (set_size, unique_members, fields.next()) {
            (Some(set_size), Some(unique_members), Some(_)) => {
                Ok(Self::new(set_size, unique_members))
            }
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_any_prefix() {
        let name: DatasetName = "my_sets_5_50.csv".parse().unwrap();
        assert_eq!(name, DatasetName::new(5, 50));
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        for bad in [
            "set_data_5_50.txt",
            "set_data_5.csv",
            "5_50.csv",
            "set_data_x_50.csv",
            "set_data_5_.csv",
            "README.md",
        ] {
            assert!(
                matches!(bad.parse::<DatasetName>(), Err(DatasetError::InvalidFileName(_))),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn test_names_sort_by_size_then_members() {
        let mut names = vec![
            DatasetName::new(10, 20),
            DatasetName::new(2, 1000),
            DatasetName::new(10, 10),
        ];
        names.sort();
        assert_eq!(
            names,
            vec![
                DatasetName::new(2, 1000),
                DatasetName::new(10, 10),
                DatasetName::new(10, 20),
            ]
        );
    }
}
