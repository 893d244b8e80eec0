//! The local filter/sort stage for loaded pages.
//!
//! This stage is pure: given the items of the currently loaded page, a
//! search term, and a sort selection, it produces the display order
//! without touching the network. It operates only on the loaded page,
//! never the full remote collection, so its results are bounded to one
//! page at a time.
//!
//! Filtering is a case-insensitive substring match: an item matches if
//! any of its configured search fields contains the term. An empty term
//! is the identity. Sorting is stable, so equal keys keep their
//! original relative order, and flipping the direction of an equal-free
//! order yields its exact reverse.

use crate::entity::ListItem;

/// Sort direction for the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// The marker rendered next to a sorted column header.
    pub fn marker(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// The active sort selection: at most one column at a time.
///
/// Selecting the active column again flips the direction; selecting a
/// different column resets the direction to ascending.
///
/// # Examples
///
/// ```
/// use backoffice_widgets::query::{SortDirection, SortState};
///
/// let mut sort = SortState::default();
/// sort.toggle("enName");
/// assert_eq!(sort.active(), Some(("enName", SortDirection::Asc)));
/// sort.toggle("enName");
/// assert_eq!(sort.active(), Some(("enName", SortDirection::Desc)));
/// sort.toggle("visibilityOrder");
/// assert_eq!(sort.active(), Some(("visibilityOrder", SortDirection::Asc)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SortState {
    key: Option<&'static str>,
    direction: SortDirection,
}

impl SortState {
    /// Selects a column, flipping direction on reselection.
    pub fn toggle(&mut self, key: &'static str) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Asc;
        }
    }

    /// The active `(column key, direction)` pair, if any.
    pub fn active(&self) -> Option<(&'static str, SortDirection)> {
        self.key.map(|k| (k, self.direction))
    }

    /// Clears the sort selection.
    pub fn clear(&mut self) {
        self.key = None;
        self.direction = SortDirection::Asc;
    }
}

/// Filters items by a case-insensitive substring search over the
/// configured search fields. An empty term returns all items unchanged
/// in order.
pub fn search<T: ListItem>(items: &[T], term: &str) -> Vec<T> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

/// Sorts items in place by one column key. Stable: equal keys keep
/// their original relative order.
pub fn sort<T: ListItem>(items: &mut [T], key: &str, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ord = a.sort_value(key).compare(&b.sort_value(key));
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Runs the full stage: filter, then sort if a column is active.
pub fn apply<T: ListItem>(items: &[T], term: &str, sort_state: &SortState) -> Vec<T> {
    let mut out = search(items, term);
    if let Some((key, direction)) = sort_state.active() {
        sort(&mut out, key, direction);
    }
    out
}
