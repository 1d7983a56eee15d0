//! Batch result types.

use std::time::Duration;

use setcover_io::DatasetName;
use setcover_solver::SolveStats;

/// Outcome of solving one dataset file.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetResult {
    /// File name inside the dataset directory.
    pub file_name: String,
    /// Members per set, from the file name.
    pub set_size: usize,
    /// Member pool size, from the file name.
    pub unique_members: usize,
    /// Sets in the loaded family.
    pub set_count: usize,
    /// Distinct members across all sets.
    pub universe_size: usize,
    /// Sets in the greedy cover.
    pub required_sets: usize,
    /// Time spent in the solver, excluding loading.
    pub solve_time: Duration,
}

impl DatasetResult {
    /// Builds a result from the parsed file name and the solver statistics.
    ///
    /// # Example
    ///
    /// ```
    /// use setcover_benchmark::DatasetResult;
    /// use setcover_io::DatasetName;
    /// use setcover_solver::SolveStats;
    ///
    /// let mut stats = SolveStats::default();
    /// stats.set_count = 1000;
    /// stats.universe_size = 50;
    ///
    /// let result = DatasetResult::from_stats(
    ///     "set_data_5_50.csv",
    ///     DatasetName::new(5, 50),
    ///     &stats,
    ///     21,
    /// );
    /// assert_eq!(result.set_size, 5);
    /// assert_eq!(result.required_sets, 21);
    /// ```
    pub fn from_stats(
        file_name: impl Into<String>,
        name: DatasetName,
        stats: &SolveStats,
        required_sets: usize,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            set_size: name.set_size,
            unique_members: name.unique_members,
            set_count: stats.set_count,
            universe_size: stats.universe_size,
            required_sets,
            solve_time: stats.elapsed(),
        }
    }

    /// Solve time in whole milliseconds.
    pub fn solve_time_ms(&self) -> u128 {
        self.solve_time.as_millis()
    }

    /// Grid coordinates used for ordering.
    pub fn key(&self) -> (usize, usize) {
        (self.set_size, self.unique_members)
    }
}

/// Results of one batch run over a dataset directory.
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// Per-dataset results.
    pub results: Vec<DatasetResult>,
    /// Files skipped because their names carry no grid coordinates.
    pub skipped: Vec<String>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dataset result.
    pub fn add(&mut self, result: DatasetResult) {
        self.results.push(result);
    }

    /// Orders results by `(set_size, unique_members)`.
    pub fn sort(&mut self) {
        self.results.sort_by_key(DatasetResult::key);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the result for a grid point, if that dataset was solved.
    pub fn get(&self, set_size: usize, unique_members: usize) -> Option<&DatasetResult> {
        self.results
            .iter()
            .find(|r| r.key() == (set_size, unique_members))
    }

    /// Distinct set sizes in ascending order.
    pub fn set_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.results.iter().map(|r| r.set_size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Distinct member pool sizes in ascending order.
    pub fn unique_members(&self) -> Vec<usize> {
        let mut members: Vec<usize> = self.results.iter().map(|r| r.unique_members).collect();
        members.sort_unstable();
        members.dedup();
        members
    }

    /// Total solver time across all datasets.
    pub fn total_solve_time(&self) -> Duration {
        self.results.iter().map(|r| r.solve_time).sum()
    }

    /// Average solve time.
    pub fn avg_solve_time(&self) -> Duration {
        if self.results.is_empty() {
            return Duration::ZERO;
        }
        self.total_solve_time() / self.results.len() as u32
    }

    /// Minimum solve time.
    pub fn min_solve_time(&self) -> Duration {
        self.results
            .iter()
            .map(|r| r.solve_time)
            .min()
            .unwrap_or_default()
    }

    /// Maximum solve time.
    pub fn max_solve_time(&self) -> Duration {
        self.results
            .iter()
            .map(|r| r.solve_time)
            .max()
            .unwrap_or_default()
    }

    /// Dataset needing the most sets.
    pub fn largest_cover(&self) -> Option<&DatasetResult> {
        self.results.iter().max_by_key(|r| r.required_sets)
    }

    /// Dataset needing the fewest sets.
    pub fn smallest_cover(&self) -> Option<&DatasetResult> {
        self.results.iter().min_by_key(|r| r.required_sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(set_size: usize, unique_members: usize, required: usize, ms: u64) -> DatasetResult {
        DatasetResult {
            file_name: DatasetName::new(set_size, unique_members).file_name(),
            set_size,
            unique_members,
            set_count: 100,
            universe_size: unique_members,
            required_sets: required,
            solve_time: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_sort_by_grid_coordinates() {
        let mut batch = BatchResult::new();
        batch.add(result(10, 20, 3, 5));
        batch.add(result(2, 1000, 900, 40));
        batch.add(result(10, 10, 1, 2));
        batch.sort();

        let keys: Vec<_> = batch.results.iter().map(DatasetResult::key).collect();
        assert_eq!(keys, vec![(2, 1000), (10, 10), (10, 20)]);
        assert_eq!(batch.set_sizes(), vec![2, 10]);
        assert_eq!(batch.unique_members(), vec![10, 20, 1000]);
    }

    #[test]
    fn test_time_aggregates() {
        let mut batch = BatchResult::new();
        batch.add(result(1, 10, 10, 10));
        batch.add(result(5, 10, 3, 30));

        assert_eq!(batch.total_solve_time(), Duration::from_millis(40));
        assert_eq!(batch.avg_solve_time(), Duration::from_millis(20));
        assert_eq!(batch.min_solve_time(), Duration::from_millis(10));
        assert_eq!(batch.max_solve_time(), Duration::from_millis(30));
        assert_eq!(batch.largest_cover().map(|r| r.required_sets), Some(10));
        assert_eq!(batch.smallest_cover().map(|r| r.required_sets), Some(3));
    }

    #[test]
    fn test_empty_batch() {
        let batch = BatchResult::new();

        assert!(batch.is_empty());
        assert_eq!(batch.avg_solve_time(), Duration::ZERO);
        assert!(batch.largest_cover().is_none());
        assert!(batch.get(1, 10).is_none());
    }
}
