//! Cover: the ordered selection produced by a solver.

use crate::family::SetId;

/// Ordered sequence of selected set identifiers.
///
/// The order is the order in which the solver picked the sets, so the first
/// entry is the set that contributed the most new elements.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cover<I: SetId> {
    selected: Vec<I>,
}

impl<I: SetId> Cover<I> {
    /// Creates an empty cover.
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    /// Appends a selected set.
    pub fn push(&mut self, id: I) {
        self.selected.push(id);
    }

    /// Returns the selected ids in selection order.
    pub fn selected(&self) -> &[I] {
        &self.selected
    }

    /// Returns the number of selected sets.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if no set was selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns true if `id` was selected.
    pub fn contains(&self, id: &I) -> bool {
        self.selected.contains(id)
    }

    /// Iterates over the selected ids in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.selected.iter()
    }

    /// Consumes the cover, returning the selected ids.
    pub fn into_vec(self) -> Vec<I> {
        self.selected
    }
}

impl<I: SetId> Default for Cover<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: SetId> From<Vec<I>> for Cover<I> {
    fn from(selected: Vec<I>) -> Self {
        Self { selected }
    }
}

impl<'a, I: SetId> IntoIterator for &'a Cover<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.selected.iter()
    }
}
