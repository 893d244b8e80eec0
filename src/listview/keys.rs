//! Key bindings for the list-view controller.
//!
//! ## Navigation
//!
//! - **Cursor**: `↑/k` (up), `↓/j` (down)
//! - **Pages**: `→/l/pgdn` (next), `←/h/pgup` (prev), `s` (cycle page size)
//!
//! ## Search and sort
//!
//! - `/` starts a search; `enter` accepts it, `esc` clears it
//! - `1`-`9` sorts by the corresponding column (again flips direction)
//!
//! ## Row actions
//!
//! - `enter` opens the row's details, `d` asks to delete it
//! - `e` navigates to the edit form, `a` to the create form
//! - in the delete confirmation: `y/enter` confirms, `n/esc` cancels
//!
//! Entity toggles are registered per view with
//! [`Model::with_toggle`](super::Model::with_toggle), not here.

use crate::key;
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for list navigation, search, sort, and row actions.
#[derive(Debug, Clone)]
pub struct ListViewKeyMap {
    /// Move selection up one row.
    pub cursor_up: key::Binding,
    /// Move selection down one row.
    pub cursor_down: key::Binding,
    /// Cycle to the next allowed page size.
    pub cycle_page_size: key::Binding,
    /// Enter search mode.
    pub search: key::Binding,
    /// Clear the active search term.
    pub clear_search: key::Binding,
    /// Accept the current search input.
    pub accept_search: key::Binding,
    /// Open the selected row's details.
    pub details: key::Binding,
    /// Ask to delete the selected row.
    pub delete: key::Binding,
    /// Confirm the pending deletion.
    pub confirm: key::Binding,
    /// Cancel the pending deletion or close a dialog.
    pub cancel: key::Binding,
    /// Navigate to the edit form for the selected row.
    pub edit: key::Binding,
    /// Navigate to the create form.
    pub add: key::Binding,
    /// Retry the failed fetch.
    pub retry: key::Binding,
    /// Quit.
    pub quit: key::Binding,
    /// Force quit.
    pub force_quit: key::Binding,
}

impl Default for ListViewKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            cycle_page_size: key::Binding::new(vec![KeyCode::Char('s')])
                .with_help("s", "page size"),
            search: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            clear_search: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear search"),
            accept_search: key::Binding::new(vec![KeyCode::Enter])
                .with_help("enter", "accept search"),
            details: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "details"),
            delete: key::Binding::new(vec![KeyCode::Char('d'), KeyCode::Delete])
                .with_help("d", "delete"),
            confirm: key::Binding::new(vec![KeyCode::Char('y'), KeyCode::Enter])
                .with_help("y", "confirm"),
            cancel: key::Binding::new(vec![KeyCode::Char('n'), KeyCode::Esc])
                .with_help("n/esc", "cancel"),
            edit: key::Binding::new(vec![KeyCode::Char('e')]).with_help("e", "edit"),
            add: key::Binding::new(vec![KeyCode::Char('a')]).with_help("a", "add"),
            retry: key::Binding::new(vec![KeyCode::Char('r')]).with_help("r", "retry"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: key::Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "force quit"),
        }
    }
}

impl key::KeyMap for ListViewKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.cursor_up,
            &self.cursor_down,
            &self.search,
            &self.details,
            &self.add,
            &self.quit,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.cursor_up, &self.cursor_down, &self.cycle_page_size],
            vec![&self.search, &self.clear_search, &self.accept_search],
            vec![&self.details, &self.delete, &self.edit, &self.add],
            vec![&self.retry, &self.quit, &self.force_quit],
        ]
    }
}
