//! Set family fixtures.

use rand::seq::index::sample;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use setcover_core::SetFamily;

/// The worked example: `A = {1,2,3}`, `B = {3,4}`, `C = {5}`.
///
/// Greedy selects `A`, then `B`, then `C`.
pub fn example_family() -> SetFamily<&'static str, u32> {
    let mut family = SetFamily::new();
    family
        .insert_set("A", [1, 2, 3])
        .expect("fixture ids are unique");
    family.insert_set("B", [3, 4]).expect("fixture ids are unique");
    family.insert_set("C", [5]).expect("fixture ids are unique");
    family
}

/// `count` pairwise-disjoint sets of `width` elements each.
///
/// Set `i` holds elements `i * width .. (i + 1) * width`.
pub fn disjoint_family(count: usize, width: usize) -> SetFamily<usize, usize> {
    let mut family = SetFamily::new();
    for id in 0..count {
        family
            .insert_set(id, id * width..(id + 1) * width)
            .expect("fixture ids are unique");
    }
    family
}

/// A single set `"all"` holding elements `0..size`.
pub fn single_set_family(size: u32) -> SetFamily<&'static str, u32> {
    let mut family = SetFamily::new();
    family
        .insert_set("all", 0..size)
        .expect("fixture ids are unique");
    family
}

/// Seeded random family in the shape of the synthetic datasets.
///
/// Each of the `set_count` sets (ids `1..=set_count`) samples `set_size`
/// distinct members from `1..=unique_members`.
///
/// # Panics
///
/// Panics if `set_size > unique_members`.
pub fn random_family(
    seed: u64,
    set_count: u32,
    set_size: usize,
    unique_members: usize,
) -> SetFamily<u32, u32> {
    assert!(set_size <= unique_members, "cannot sample without replacement");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut family = SetFamily::new();
    for id in 1..=set_count {
        let members = sample(&mut rng, unique_members, set_size)
            .into_iter()
            .map(|index| index as u32 + 1);
        family
            .insert_set(id, members)
            .expect("fixture ids are unique");
    }
    family
}
