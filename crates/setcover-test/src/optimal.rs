//! Exact optimum for small families and the greedy approximation bound.

use std::collections::HashMap;

use setcover_core::{Element, SetFamily, SetId};

/// Largest family [`optimal_cover_size`] accepts.
pub const MAX_BRUTE_FORCE_SETS: usize = 20;

/// Size of a minimum cover, by exhaustive search over subsets.
///
/// # Panics
///
/// Panics if the family has more than [`MAX_BRUTE_FORCE_SETS`] sets or a
/// universe of more than 128 elements.
pub fn optimal_cover_size<I: SetId, E: Element>(family: &SetFamily<I, E>) -> usize {
    assert!(family.len() <= MAX_BRUTE_FORCE_SETS, "family too large");

    let mut index: HashMap<&E, u32> = HashMap::new();
    let masks: Vec<u128> = family
        .iter()
        .map(|(_, members)| {
            members.iter().fold(0u128, |mask, element| {
                let next = index.len() as u32;
                let bit = *index.entry(element).or_insert(next);
                assert!(bit < 128, "universe too large");
                mask | (1u128 << bit)
            })
        })
        .collect();

    let full = match index.len() {
        0 => return 0,
        128 => u128::MAX,
        n => (1u128 << n) - 1,
    };

    let mut best = masks.len();
    for subset in 1u32..(1u32 << masks.len()) {
        let size = subset.count_ones() as usize;
        if size >= best {
            continue;
        }
        let union = masks
            .iter()
            .enumerate()
            .filter(|(slot, _)| subset & (1 << slot) != 0)
            .fold(0u128, |acc, (_, mask)| acc | mask);
        if union == full {
            best = size;
        }
    }
    best
}

/// The `n`-th harmonic number `1 + 1/2 + ... + 1/n`.
pub fn harmonic(n: usize) -> f64 {
    (1..=n).map(|k| 1.0 / k as f64).sum()
}

/// Upper bound on the greedy cover size: `H(max set size) * optimum`.
pub fn greedy_bound<I: SetId, E: Element>(family: &SetFamily<I, E>) -> f64 {
    harmonic(family.max_set_size()) * optimal_cover_size(family) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::{disjoint_family, example_family, single_set_family};

    #[test]
    fn test_optimal_of_fixtures() {
        assert_eq!(optimal_cover_size(&example_family()), 3);
        assert_eq!(optimal_cover_size(&disjoint_family(4, 3)), 4);
        assert_eq!(optimal_cover_size(&single_set_family(10)), 1);
    }

    #[test]
    fn test_optimal_prefers_fewer_larger_sets() {
        let mut family = SetFamily::new();
        family.insert_set(0, [1, 2, 3, 4]).unwrap();
        family.insert_set(1, [5, 6, 7, 8]).unwrap();
        family.insert_set(2, [1, 2, 5, 6, 9]).unwrap();
        family.insert_set(3, [9]).unwrap();

        assert_eq!(optimal_cover_size(&family), 3);
    }

    #[test]
    fn test_harmonic() {
        assert_eq!(harmonic(0), 0.0);
        assert_eq!(harmonic(1), 1.0);
        assert!((harmonic(3) - (1.0 + 0.5 + 1.0 / 3.0)).abs() < 1e-12);
    }
}
