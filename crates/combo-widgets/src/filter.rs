#![forbid(unsafe_code)]

//! Substring filtering over a [`Catalog`].
//!
//! Filtering is permissive: an option is visible when its match key contains
//! the input text anywhere, compared case-insensitively. Empty input shows the
//! whole catalog. The result preserves catalog order.

use crate::catalog::{Catalog, ComboOption};

/// Ordered subsequence of catalog positions visible for some input text.
///
/// # Invariants
///
/// 1. Indices are strictly increasing (catalog order is preserved).
/// 2. Every index is a valid position in the catalog it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    /// Number of visible options.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Catalog position of the option at view position `pos`.
    pub fn get(&self, pos: usize) -> Option<usize> {
        self.indices.get(pos).copied()
    }

    /// View position of catalog entry `catalog_index`, if visible.
    pub fn position_of(&self, catalog_index: usize) -> Option<usize> {
        self.indices.binary_search(&catalog_index).ok()
    }

    /// Catalog positions in view order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Iterate `(catalog_index, option)` pairs in view order.
    pub fn options<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (usize, &'a ComboOption)> + 'a {
        self.indices
            .iter()
            .filter_map(move |&i| catalog.get(i).map(|o| (i, o)))
    }
}

/// Compute the options of `catalog` whose match key contains `text`,
/// ignoring case.
pub fn filter(catalog: &Catalog, text: &str) -> FilteredView {
    if text.is_empty() {
        return FilteredView {
            indices: (0..catalog.len()).collect(),
        };
    }
    let needle = text.to_lowercase();
    let indices = catalog
        .iter()
        .enumerate()
        .filter(|(_, option)| option.folded_key().contains(&needle))
        .map(|(i, _)| i)
        .collect();
    FilteredView { indices }
}
