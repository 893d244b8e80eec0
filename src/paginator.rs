//! A pagination component for remote collections.
//!
//! This component is used for calculating pagination and rendering the
//! pagination control. It does not render pages of content; it holds
//! the state of the control itself: current page, page size, and the
//! total count reported by the backend.
//!
//! Pages are 1-based, matching the REST surface (`page=1` is the first
//! page). The invariant `1 <= page <= total_pages` holds whenever the
//! collection is non-empty, and navigation clamps at the bounds so an
//! out-of-range page is never reachable through the control.
//!
//! Page sizes come from the fixed [`PAGE_SIZES`] set; changing the page
//! size resets the current page to 1.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;

/// The page sizes a list view may use.
pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// The default page size for new list views.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// The type of pagination to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Display pagination as numerals (e.g., "1/5").
    #[default]
    Arabic,
    /// Display pagination as dots (e.g., "● ○ ○ ○ ○").
    Dots,
}

/// Key bindings for pagination navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Navigate to the previous page.
    pub prev_page: key::Binding,
    /// Navigate to the next page.
    pub next_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![KeyCode::PageDown, KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "next page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.prev_page, &self.next_page]]
    }
}

/// Pagination state for one list view.
///
/// # Examples
///
/// ```
/// use backoffice_widgets::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(20);
/// paginator.set_total_count(25);
/// assert_eq!(paginator.total_pages, 2);
///
/// paginator.next_page();
/// assert_eq!(paginator.page, 2);
/// paginator.next_page(); // already on the last page
/// assert_eq!(paginator.page, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The type of pagination to display (Dots or Arabic).
    pub paginator_type: Type,
    /// The current page, 1-based.
    pub page: usize,
    /// The number of items per page, one of [`PAGE_SIZES`].
    pub per_page: usize,
    /// The total number of pages, always at least 1.
    pub total_pages: usize,
    /// The total item count reported by the backend.
    pub total_count: usize,

    /// The character for the active page in Dots mode.
    pub active_dot: String,
    /// The character for inactive pages in Dots mode.
    pub inactive_dot: String,
    /// The format string for Arabic mode (e.g., "%d/%d").
    pub arabic_format: String,

    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            paginator_type: Type::default(),
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            total_pages: 1,
            total_count: 0,
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "%d/%d".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator on page 1 with the default page size.
    pub fn new() -> Self {
        let mut model = Self::default();
        model.sync_keymap();
        model
    }

    /// Sets the page size (builder pattern). See [`Model::set_per_page`].
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the page size and resets to page 1.
    ///
    /// Only members of [`PAGE_SIZES`] are accepted; anything else
    /// leaves the paginator unchanged.
    pub fn set_per_page(&mut self, per_page: usize) {
        if !PAGE_SIZES.contains(&per_page) {
            return;
        }
        self.per_page = per_page;
        self.page = 1;
        self.recalculate();
    }

    /// The page size that follows the current one in [`PAGE_SIZES`],
    /// wrapping around.
    pub fn next_page_size(&self) -> usize {
        let pos = PAGE_SIZES
            .iter()
            .position(|&s| s == self.per_page)
            .unwrap_or(0);
        PAGE_SIZES[(pos + 1) % PAGE_SIZES.len()]
    }

    /// Records the total item count reported by the backend and
    /// recalculates the page count.
    ///
    /// If the current page falls out of range (items were deleted), it
    /// is clamped to the last valid page.
    pub fn set_total_count(&mut self, count: usize) {
        self.total_count = count;
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.total_pages = if self.total_count == 0 {
            1
        } else {
            self.total_count.div_ceil(self.per_page)
        };
        if self.page > self.total_pages {
            self.page = self.total_pages;
        }
        if self.page == 0 {
            self.page = 1;
        }
        self.sync_keymap();
    }

    /// Disables the navigation bindings at the collection bounds so
    /// they stop matching and drop out of help rendering.
    fn sync_keymap(&mut self) {
        self.keymap.prev_page.set_enabled(!self.on_first_page());
        self.keymap.next_page.set_enabled(!self.on_last_page());
    }

    /// Moves to a specific page, ignoring out-of-range targets.
    pub fn set_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages {
            self.page = page;
        }
        self.sync_keymap();
    }

    /// Navigates to the previous page, clamped at page 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
        self.sync_keymap();
    }

    /// Navigates to the next page, clamped at the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
        self.sync_keymap();
    }

    /// Whether the paginator is on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Whether the paginator is on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// The number of items on the current page.
    pub fn items_on_page(&self) -> usize {
        let (start, end) = self.slice_bounds(self.total_count);
        end - start
    }

    /// Slice bounds for the current page over locally held data.
    ///
    /// Returns `(start, end)` usable directly with slice notation.
    pub fn slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = ((self.page - 1) * self.per_page).min(length);
        let end = (start + self.per_page).min(length);
        (start, end)
    }

    /// Updates the paginator from key messages.
    ///
    /// Returns `true` when the page changed so the caller can refetch.
    pub fn update(&mut self, msg: &Msg) -> bool {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let before = self.page;
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            }
            return self.page != before;
        }
        false
    }

    /// Renders the pagination control.
    pub fn view(&self) -> String {
        match self.paginator_type {
            Type::Arabic => self.arabic_view(),
            Type::Dots => self.dots_view(),
        }
    }

    fn arabic_view(&self) -> String {
        self.arabic_format
            .replacen("%d", &self.page.to_string(), 1)
            .replacen("%d", &self.total_pages.to_string(), 1)
    }

    fn dots_view(&self) -> String {
        let mut s = String::new();
        for i in 1..=self.total_pages {
            if i == self.page {
                s.push_str(&self.active_dot);
            } else {
                s.push_str(&self.inactive_dot);
            }
            if i < self.total_pages {
                s.push(' ');
            }
        }
        s
    }
}
