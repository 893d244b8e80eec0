//! Domain traits and shared value types for list-backed entities.
//!
//! Every list view in a back-office panel is a table over one remote
//! collection: brands, categories, colors, sizes, sliders, orders,
//! notifications, return reasons. This module defines the seam those
//! entities implement so the accessor, the filter/sort stage, the
//! mutation dispatcher, and the list-view controller can all stay
//! generic:
//! - [`ListItem`]: one row of a remote collection
//! - [`DraftPayload`]: the validated write payload for create/update
//! - [`ToggleAction`]: entity-specific toggles (visibility, mark-seen, ...)
//! - [`Language`], [`SortValue`], [`Column`]: the shared vocabulary
//!
//! # Examples
//!
//! ```
//! use backoffice_widgets::entity::{Column, Language, ListItem, SortValue};
//! use backoffice_widgets::brands::Brand;
//!
//! let brand = Brand::sample("1", "أحمر", "Red");
//! assert_eq!(brand.search_text().len(), 2);
//! assert!(matches!(brand.sort_value("enName"), SortValue::Text(_)));
//! assert!(Brand::columns().iter().any(|c| c.sortable));
//! let _ = brand.cells(Language::En);
//! ```

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;

/// The operating language of a view.
///
/// Back-office collections are bilingual: every request carries a
/// language, every cache key includes it, and display strings (labels,
/// toasts, column titles) follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Arabic.
    Ar,
}

impl Language {
    /// The wire value sent in the `language` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Whether text in this language renders right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed sort key extracted from an item.
///
/// Text keys compare case-insensitively, numeric keys by total order,
/// and flags as 0/1. Comparing mismatched variants yields `Equal` so a
/// misconfigured column degrades to the original (stable) order instead
/// of panicking.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// A string field (names, labels, phone numbers).
    Text(String),
    /// A numeric field (orders, counts, prices).
    Number(f64),
    /// A boolean field (visibility and similar flags).
    Flag(bool),
}

impl SortValue {
    /// Compares two sort values in ascending order.
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Flag(a), SortValue::Flag(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// One display column of an entity table.
#[derive(Debug, Clone)]
pub struct Column {
    /// Stable identifier used as the sort key (`"enName"`, `"visibilityOrder"`).
    pub key: &'static str,
    /// English column title.
    pub title_en: &'static str,
    /// Arabic column title.
    pub title_ar: &'static str,
    /// Rendered cell width in terminal columns.
    pub width: usize,
    /// Whether the column participates in sorting.
    pub sortable: bool,
}

impl Column {
    /// Creates a sortable column.
    pub fn new(key: &'static str, title_en: &'static str, title_ar: &'static str, width: usize) -> Self {
        Self {
            key,
            title_en,
            title_ar,
            width,
            sortable: true,
        }
    }

    /// Marks the column as display-only.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// The column title in the view's operating language.
    pub fn title(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.title_en,
            Language::Ar => self.title_ar,
        }
    }
}

/// A validated write payload for create and update mutations.
///
/// Validation runs before anything is dispatched; a payload that fails
/// its schema check never reaches the mutation dispatcher, matching the
/// upstream form-validation contract.
pub trait DraftPayload: Clone + Serialize + Send + Sync + 'static {
    /// Checks the payload against its schema.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// An entity-specific toggle mutation (mark an order item missing, mark
/// a notification seen, toggle a brand's visibility).
pub trait ToggleAction: Clone + Send + Sync + 'static {
    /// The REST action segment, e.g. `"toggle-visibility"`.
    fn action(&self) -> &'static str;

    /// A short human label for toasts, in the given language.
    fn describe(&self, language: Language) -> &'static str;
}

/// A row of a remote collection, displayable in a list view.
///
/// The three associated types tie an entity to its write payload and
/// its toggle set, so one dispatcher implementation covers every
/// entity's mutation surface.
pub trait ListItem: Clone + Send + Sync + 'static {
    /// Opaque identifier, unique within the collection and stable
    /// across requests.
    type Id: Clone + Eq + Hash + Display + Send + Sync + 'static;
    /// Validated create/update payload.
    type Draft: DraftPayload;
    /// Entity-specific toggle actions.
    type Toggle: ToggleAction;

    /// The REST resource segment for this collection (`"brands"`).
    const RESOURCE: &'static str;

    /// This item's identifier.
    fn id(&self) -> Self::Id;

    /// The configured searchable fields, in display order.
    ///
    /// The filter stage matches case-insensitively against each entry;
    /// an item matches if any field contains the search term.
    fn search_text(&self) -> Vec<String>;

    /// The sort key for a column, by column key.
    fn sort_value(&self, key: &str) -> SortValue;

    /// Rendered cell contents for the table row, one per column.
    fn cells(&self, language: Language) -> Vec<String>;

    /// The table columns for this entity.
    fn columns() -> Vec<Column>;
}
