//! Cover verification.

use std::collections::HashSet;

use setcover_core::{Element, SetFamily, SetId};
use thiserror::Error;

/// A way in which a selection fails to be a valid cover of a family.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoverViolation {
    /// A selected id does not name a set of the family.
    #[error("selected set {0} is not part of the family")]
    UnknownSet(String),

    /// A set was selected more than once.
    #[error("set {0} was selected more than once")]
    DuplicateSet(String),

    /// The selected sets leave part of the universe uncovered.
    #[error("{missing} element(s) of the universe are not covered")]
    Uncovered { missing: usize },
}

/// Checks that `selected` is a duplicate-free cover of `family`'s universe.
///
/// # Example
///
/// ```
/// use setcover_core::SetFamily;
/// use setcover_solver::{verify_cover, CoverViolation};
///
/// let mut family = SetFamily::new();
/// family.insert_set("A", [1, 2]).unwrap();
/// family.insert_set("B", [3]).unwrap();
///
/// assert!(verify_cover(&family, &["A", "B"]).is_ok());
/// assert_eq!(
///     verify_cover(&family, &["A"]),
///     Err(CoverViolation::Uncovered { missing: 1 })
/// );
/// ```
pub fn verify_cover<I: SetId, E: Element>(
    family: &SetFamily<I, E>,
    selected: &[I],
) -> Result<(), CoverViolation> {
    let mut seen: HashSet<&I> = HashSet::with_capacity(selected.len());
    let mut covered: HashSet<&E> = HashSet::new();

    for id in selected {
        let members = family
            .get(id)
            .ok_or_else(|| CoverViolation::UnknownSet(format!("{id:?}")))?;
        if !seen.insert(id) {
            return Err(CoverViolation::DuplicateSet(format!("{id:?}")));
        }
        covered.extend(members.iter());
    }

    let missing = family.universe_size() - covered.len();
    if missing > 0 {
        return Err(CoverViolation::Uncovered { missing });
    }
    Ok(())
}
