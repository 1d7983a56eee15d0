//! Greedy set cover with lazy re-evaluation.
//!
//! Logging levels:
//! - **INFO**: Solve start/end with problem scale and totals
//! - **DEBUG**: Each accepted set, dropped empty sets
//! - **TRACE**: Each stale entry pushed back or pruned

use std::collections::{BinaryHeap, HashMap};

use setcover_config::{EnvironmentMode, SolverConfig, TieBreak};
use setcover_core::{Cover, Element, Result, SetCoverError, SetFamily, SetId};
use tracing::{debug, info, trace};

use crate::candidate::Candidate;
use crate::stats::SolveStats;
use crate::verify::verify_cover;

/// Cover together with the statistics of the solve that produced it.
#[derive(Debug, Clone)]
pub struct SolveOutcome<I: SetId> {
    /// Selected sets in selection order.
    pub cover: Cover<I>,
    /// Counters recorded while solving.
    pub stats: SolveStats,
}

/// Greedy maximum-coverage solver.
///
/// Repeatedly selects the set covering the most still-uncovered elements.
/// Queued gains are only refreshed for the set that reaches the top of the
/// queue, which keeps the total work at O(E log S).
///
/// # Example
///
/// ```
/// use setcover_core::SetFamily;
/// use setcover_solver::GreedySetCoverSolver;
///
/// let mut family = SetFamily::new();
/// family.insert_set("A", [1, 2, 3]).unwrap();
/// family.insert_set("B", [3, 4]).unwrap();
/// family.insert_set("C", [5]).unwrap();
///
/// let cover = GreedySetCoverSolver::default().solve(&family).unwrap();
/// assert_eq!(cover.selected(), &["A", "B", "C"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedySetCoverSolver {
    config: SolverConfig,
}

impl GreedySetCoverSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Computes a cover of `family`'s universe.
    ///
    /// The family is only read; all bookkeeping happens on a private working
    /// copy dropped before returning.
    ///
    /// # Errors
    ///
    /// Returns [`SetCoverError::EmptyFamily`] if `family` has no sets.
    pub fn solve<I: SetId, E: Element>(&self, family: &SetFamily<I, E>) -> Result<Cover<I>> {
        self.solve_with_stats(family).map(|outcome| outcome.cover)
    }

    /// Computes a cover and returns it with solve statistics.
    pub fn solve_with_stats<I: SetId, E: Element>(
        &self,
        family: &SetFamily<I, E>,
    ) -> Result<SolveOutcome<I>> {
        if family.is_empty() {
            return Err(SetCoverError::EmptyFamily);
        }

        let mut stats = SolveStats::default();
        stats.start();

        let mut working = WorkingFamily::build(family, self.config.tie_break);
        stats.set_count = family.len();
        stats.universe_size = working.universe_size;
        stats.membership_count = family.membership_count();
        stats.empty_sets_dropped = working.empty_sets_dropped;

        info!(
            event = "solve_start",
            set_count = stats.set_count as u64,
            universe_size = stats.universe_size as u64,
            membership_count = stats.membership_count as u64,
        );

        let cover = working.run(self.config.prune_exhausted, &mut stats)?;
        stats.finish();

        if self.config.environment_mode == EnvironmentMode::FullAssert {
            verify_cover(family, cover.selected())
                .map_err(|violation| SetCoverError::Internal(violation.to_string()))?;
        }

        info!(
            event = "solve_end",
            selected = stats.selected,
            rounds = stats.rounds,
            reinsertions = stats.reinsertions,
            pruned = stats.pruned,
            duration_ms = stats.elapsed_ms(),
        );

        Ok(SolveOutcome { cover, stats })
    }
}

/// Solves `family` with the default configuration.
///
/// ```
/// use setcover_core::SetFamily;
///
/// let family = SetFamily::from_pairs([(1, 'a'), (2, 'b'), (2, 'c')]);
/// let cover = setcover_solver::solve(&family).unwrap();
/// assert_eq!(cover.selected(), &[2, 1]);
/// ```
pub fn solve<I: SetId, E: Element>(family: &SetFamily<I, E>) -> Result<Cover<I>> {
    GreedySetCoverSolver::default().solve(family)
}

struct WorkingSet<'a, I> {
    id: &'a I,
    remaining: Vec<u32>,
}

// Solve-local copy of the family with elements interned to dense indices.
struct WorkingFamily<'a, I> {
    sets: Vec<WorkingSet<'a, I>>,
    ranks: Vec<usize>,
    universe_size: usize,
    empty_sets_dropped: usize,
}

impl<'a, I: SetId> WorkingFamily<'a, I> {
    fn build<E: Element>(family: &'a SetFamily<I, E>, tie_break: TieBreak) -> Self {
        let mut interned: HashMap<&'a E, u32> = HashMap::new();
        let mut sets = Vec::with_capacity(family.len());
        let mut empty_sets_dropped = 0;

        for (id, members) in family.iter() {
            if members.is_empty() {
                debug!(event = "empty_set_dropped", set = ?id);
                empty_sets_dropped += 1;
                continue;
            }
            let remaining = members
                .iter()
                .map(|element| {
                    let next = interned.len() as u32;
                    *interned.entry(element).or_insert(next)
                })
                .collect();
            sets.push(WorkingSet { id, remaining });
        }

        let mut order: Vec<usize> = (0..sets.len()).collect();
        if tie_break == TieBreak::Identifier {
            order.sort_by(|&a, &b| sets[a].id.cmp(sets[b].id));
        }
        let mut ranks = vec![0; sets.len()];
        for (rank, &slot) in order.iter().enumerate() {
            ranks[slot] = rank;
        }

        Self {
            sets,
            ranks,
            universe_size: interned.len(),
            empty_sets_dropped,
        }
    }

    fn run(&mut self, prune_exhausted: bool, stats: &mut SolveStats) -> Result<Cover<I>> {
        let mut queue: BinaryHeap<Candidate> = self
            .sets
            .iter()
            .enumerate()
            .map(|(slot, set)| Candidate {
                gain: set.remaining.len(),
                rank: self.ranks[slot],
                slot,
            })
            .collect();

        let mut covered = vec![false; self.universe_size];
        let mut covered_count = 0usize;
        let mut cover = Cover::new();

        while covered_count < self.universe_size {
            let Some(candidate) = queue.pop() else {
                return Err(SetCoverError::Internal(format!(
                    "queue exhausted with {} element(s) uncovered",
                    self.universe_size - covered_count
                )));
            };
            stats.record_round();

            let set = &mut self.sets[candidate.slot];
            let queued = set.remaining.len();
            debug_assert_eq!(queued, candidate.gain);
            set.remaining.retain(|&element| !covered[element as usize]);
            let gain = set.remaining.len();

            if gain == queued && gain > 0 {
                for &element in &set.remaining {
                    covered[element as usize] = true;
                }
                covered_count += gain;
                cover.push(set.id.clone());
                stats.record_selection();
                debug!(
                    event = "set_selected",
                    set = ?set.id,
                    round = stats.rounds,
                    gain = gain as u64,
                    covered = covered_count as u64,
                );
            } else if queued == 0 {
                // Queued gains never undercount, so a zero on top means
                // nothing uncovered is left in any set.
                return Err(SetCoverError::Internal(format!(
                    "exhausted set {:?} reached the top of the queue",
                    set.id
                )));
            } else if gain == 0 && prune_exhausted {
                stats.record_prune();
                trace!(event = "set_pruned", set = ?set.id, round = stats.rounds);
            } else {
                queue.push(Candidate { gain, ..candidate });
                stats.record_reinsertion();
                trace!(
                    event = "set_reinserted",
                    set = ?set.id,
                    round = stats.rounds,
                    stale_gain = queued as u64,
                    gain = gain as u64,
                );
            }
        }

        Ok(cover)
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
