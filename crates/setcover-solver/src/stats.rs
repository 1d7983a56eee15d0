//! Solve statistics.
//!
//! Counters for a single greedy solve, recorded as the queue is worked.

use std::time::{Duration, Instant};

/// Statistics for one solver invocation.
///
/// # Example
///
/// ```
/// use setcover_solver::stats::SolveStats;
///
/// let mut stats = SolveStats::default();
/// stats.start();
/// stats.record_round();
/// stats.record_selection();
/// stats.record_round();
/// stats.record_reinsertion();
/// stats.finish();
///
/// assert_eq!(stats.rounds, 2);
/// assert_eq!(stats.selected, 1);
/// assert_eq!(stats.reinsertions, 1);
/// assert!((stats.reinsertion_rate() - 0.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolveStats {
    start_time: Option<Instant>,
    duration: Option<Duration>,
    /// Number of sets in the input family.
    pub set_count: usize,
    /// Number of distinct elements to cover.
    pub universe_size: usize,
    /// Total set memberships in the input family.
    pub membership_count: usize,
    /// Empty sets dropped before the queue was built.
    pub empty_sets_dropped: usize,
    /// Queue extractions.
    pub rounds: u64,
    /// Stale entries pushed back with a refreshed gain.
    pub reinsertions: u64,
    /// Exhausted entries dropped from the queue.
    pub pruned: u64,
    /// Sets accepted into the cover.
    pub selected: u64,
}

impl SolveStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.duration = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.duration = Some(self.elapsed());
    }

    /// Returns the time spent solving.
    pub fn elapsed(&self) -> Duration {
        match (self.duration, self.start_time) {
            (Some(duration), _) => duration,
            (None, Some(start)) => start.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    /// Returns the elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// Records one queue extraction.
    pub fn record_round(&mut self) {
        self.rounds += 1;
    }

    /// Records an accepted set.
    pub fn record_selection(&mut self) {
        self.selected += 1;
    }

    /// Records a stale entry pushed back into the queue.
    pub fn record_reinsertion(&mut self) {
        self.reinsertions += 1;
    }

    /// Records an exhausted entry dropped from the queue.
    pub fn record_prune(&mut self) {
        self.pruned += 1;
    }

    /// Returns the share of rounds that found a stale entry.
    pub fn reinsertion_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.reinsertions as f64 / self.rounds as f64
        }
    }
}
