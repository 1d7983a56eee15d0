//! Set family: the named sets a cover is chosen from.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, SetCoverError};

/// Identifier of a set in a family.
///
/// Identifiers must be totally ordered so ties between equally useful sets
/// resolve the same way on every run.
pub trait SetId: Ord + Hash + Clone + Debug {}

impl<T: Ord + Hash + Clone + Debug> SetId for T {}

/// Identifier of an element of the universe.
pub trait Element: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Element for T {}

/// A family of named sets over a shared element universe.
///
/// Sets are kept in insertion order. Building a family from
/// `(set_id, member_id)` pairs groups members by set, the way a tabular
/// dataset is laid out.
///
/// # Example
///
/// ```
/// use setcover_core::SetFamily;
///
/// let family: SetFamily<&str, u32> = [("A", 1), ("A", 2), ("B", 2), ("B", 3)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(family.len(), 2);
/// assert_eq!(family.universe_size(), 3);
/// assert_eq!(family.membership_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SetFamily<I: SetId, E: Element> {
    sets: Vec<(I, HashSet<E>)>,
    index: HashMap<I, usize>,
}

impl<I: SetId, E: Element> SetFamily<I, E> {
    /// Creates an empty family.
    pub fn new() -> Self {
        Self {
            sets: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a family by grouping `(set_id, member_id)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (I, E)>) -> Self {
        pairs.into_iter().collect()
    }

    /// Inserts a whole set under a new identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SetCoverError::DuplicateSetId`] if `id` is already present.
    ///
    /// ```
    /// use setcover_core::{SetCoverError, SetFamily};
    ///
    /// let mut family = SetFamily::new();
    /// family.insert_set("A", [1, 2, 3]).unwrap();
    /// let err = family.insert_set("A", [4]).unwrap_err();
    /// assert!(matches!(err, SetCoverError::DuplicateSetId(_)));
    /// ```
    pub fn insert_set(&mut self, id: I, elements: impl IntoIterator<Item = E>) -> Result<()> {
        match self.index.entry(id.clone()) {
            Entry::Occupied(_) => Err(SetCoverError::DuplicateSetId(format!("{id:?}"))),
            Entry::Vacant(slot) => {
                slot.insert(self.sets.len());
                self.sets.push((id, elements.into_iter().collect()));
                Ok(())
            }
        }
    }

    /// Adds one member to the set `id`, creating the set on first sight.
    pub fn add_member(&mut self, id: I, element: E) {
        match self.index.get(&id) {
            Some(&slot) => {
                self.sets[slot].1.insert(element);
            }
            None => {
                self.index.insert(id.clone(), self.sets.len());
                self.sets.push((id, HashSet::from([element])));
            }
        }
    }

    /// Returns the number of sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if the family has no sets.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Returns the members of set `id`, if present.
    pub fn get(&self, id: &I) -> Option<&HashSet<E>> {
        self.index.get(id).map(|&slot| &self.sets[slot].1)
    }

    /// Returns true if the family contains a set named `id`.
    pub fn contains_set(&self, id: &I) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over `(id, members)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&I, &HashSet<E>)> {
        self.sets.iter().map(|(id, members)| (id, members))
    }

    /// Iterates over set identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &I> {
        self.sets.iter().map(|(id, _)| id)
    }

    /// Computes the universe: every distinct element of every set.
    pub fn universe(&self) -> HashSet<&E> {
        self.sets
            .iter()
            .flat_map(|(_, members)| members.iter())
            .collect()
    }

    /// Returns the number of distinct elements across all sets.
    pub fn universe_size(&self) -> usize {
        self.universe().len()
    }

    /// Returns the total number of set memberships.
    pub fn membership_count(&self) -> usize {
        self.sets.iter().map(|(_, members)| members.len()).sum()
    }

    /// Returns the size of the largest set.
    pub fn max_set_size(&self) -> usize {
        self.sets
            .iter()
            .map(|(_, members)| members.len())
            .max()
            .unwrap_or(0)
    }
}

impl<I: SetId, E: Element> Default for SetFamily<I, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: SetId, E: Element> FromIterator<(I, E)> for SetFamily<I, E> {
    fn from_iter<T: IntoIterator<Item = (I, E)>>(iter: T) -> Self {
        let mut family = Self::new();
        for (id, element) in iter {
            family.add_member(id, element);
        }
        family
    }
}
