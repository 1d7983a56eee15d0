//! Greedy set cover solver.
//!
//! [`GreedySetCoverSolver`] picks, round after round, the set that covers
//! the most still-uncovered elements. Gains live in a max-heap and are only
//! recomputed for the set on top: a stale entry is refreshed and pushed
//! back, a fresh one is accepted.
//!
//! # Example
//!
//! ```
//! use setcover_config::{SolverConfig, TieBreak};
//! use setcover_core::SetFamily;
//! use setcover_solver::GreedySetCoverSolver;
//!
//! let family = SetFamily::from_pairs([
//!     ("s1", 1), ("s1", 2),
//!     ("s2", 3), ("s2", 4),
//!     ("s3", 2), ("s3", 3),
//! ]);
//!
//! let solver = GreedySetCoverSolver::new(
//!     SolverConfig::new().with_tie_break(TieBreak::InsertionOrder),
//! );
//! let outcome = solver.solve_with_stats(&family).unwrap();
//!
//! assert_eq!(outcome.cover.selected(), &["s1", "s2"]);
//! assert_eq!(outcome.stats.universe_size, 4);
//! ```

mod candidate;
pub mod solver;
pub mod stats;
pub mod verify;

pub use solver::{solve, GreedySetCoverSolver, SolveOutcome};
pub use stats::SolveStats;
pub use verify::{verify_cover, CoverViolation};
