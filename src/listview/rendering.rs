//! View rendering for the list-view controller.
//!
//! The view is assembled from stacked sections: title, search line,
//! table (or loading/error panel), status line, pagination, dialog,
//! toast, and the help footer. Cell padding is width-aware so Arabic
//! and wide glyphs keep the columns aligned.

use super::style::ELLIPSIS;
use super::Model;
use crate::entity::ListItem;
use crate::key::short_help_view;
use crate::remote::CollectionClient;
use unicode_width::UnicodeWidthStr;

/// Pads or truncates a cell to an exact display width.
fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        let mut out = text.to_string();
        out.push_str(&" ".repeat(width - text_width));
        return out;
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.to_string().width();
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out.push_str(&" ".repeat(width.saturating_sub(used + 1)));
    out
}

/// Truncates a line to the terminal width without padding.
fn fit_line(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.to_string().width();
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}

impl<T: ListItem, C: CollectionClient<T>> Model<T, C> {
    /// Renders the whole view.
    pub fn view(&self) -> String {
        let mut sections = vec![self.view_header()];

        if let Some(error) = self.accessor.error() {
            sections.push(self.styles.error.clone().render(&format!("  {error}")));
            sections.push(
                self.styles
                    .error_hint
                    .clone()
                    .render("  press r to retry"),
            );
        } else if self.accessor.is_loading() {
            sections.push(self.styles.status_bar.clone().render("  loading…"));
        } else {
            sections.push(self.view_table());
            sections.push(self.view_status());
            sections.push(self.styles.pagination.clone().render(&self.paginator.view()));
        }

        if let Some(dialog) = self.view_dialog() {
            sections.push(dialog);
        }
        if let Some(toast) = &self.toast {
            sections.push(toast.view());
        }
        let help = short_help_view(&self.keymap);
        sections.push(self.styles.help.clone().render(&fit_line(&help, self.width)));

        sections.join("\n")
    }

    fn view_header(&self) -> String {
        let title = self.styles.title.clone().render(&self.title);
        let mut header = self.styles.title_bar.clone().render(&title);
        if self.searching {
            let prompt = self.styles.search_prompt.clone().render("Search: ");
            let term = self.styles.search_term.clone().render(&self.search);
            header.push_str(&format!("\n{prompt}{term}█"));
        } else if !self.search.is_empty() {
            let prompt = self.styles.search_prompt.clone().render("Search: ");
            let term = self.styles.search_term.clone().render(&self.search);
            header.push_str(&format!(
                "\n{prompt}{term} ({} matches)",
                self.visible_items().len()
            ));
        }
        header
    }

    fn view_table(&self) -> String {
        let items = self.visible_items();
        if items.is_empty() {
            return self.styles.no_items.clone().render("  No items.");
        }

        // Window the rows to the terminal height, keeping the cursor
        // in view. The budget leaves room for the chrome around the
        // table: title, search line, header, status, pagination, help.
        let max_rows = self.height.saturating_sub(9).max(5);
        let start = if self.cursor >= max_rows {
            self.cursor + 1 - max_rows
        } else {
            0
        };

        let mut lines = vec![self.view_table_header()];
        let language = self.language();
        for (row, item) in items.iter().enumerate().skip(start).take(max_rows) {
            let cells = item.cells(language);
            let mut line = String::new();
            line.push_str(if row == self.cursor { "> " } else { "  " });
            for (column, cell) in self.columns.iter().zip(cells.iter()) {
                line.push_str(&fit(cell, column.width));
                line.push(' ');
            }
            if self.dispatcher.is_busy(&item.id()) {
                line.push_str(&self.styles.busy_marker.clone().render("…"));
            }
            let style = if row == self.cursor {
                &self.styles.selected_row
            } else {
                &self.styles.row
            };
            lines.push(style.clone().render(line.trim_end()));
        }
        lines.join("\n")
    }

    fn view_table_header(&self) -> String {
        let language = self.language();
        let active = self.sort.active();
        let mut line = String::from("  ");
        for column in &self.columns {
            let title = column.title(language);
            let sorted_by = active.filter(|(key, _)| *key == column.key);
            if let Some((_, direction)) = sorted_by {
                // Carve out two cells so the styled marker keeps the
                // column width exact.
                line.push_str(&fit(title, column.width.saturating_sub(2)));
                line.push(' ');
                line.push_str(&self.styles.sort_marker.clone().render(direction.marker()));
            } else {
                line.push_str(&fit(title, column.width));
            }
            line.push(' ');
        }
        self.styles.header.clone().render(line.trim_end())
    }

    fn view_status(&self) -> String {
        let total = self.accessor.total_count().unwrap_or(0);
        let shown = self.visible_items().len();
        let mut status = format!("  {shown} of {total} items");
        if self.accessor.is_refreshing() {
            status.push_str(" · refreshing…");
        }
        self.styles.status_bar.clone().render(&status)
    }

    fn view_dialog(&self) -> Option<String> {
        if let Some(item) = self.dialog.selected() {
            let language = self.language();
            let mut lines = vec![self.styles.dialog_title.clone().render("Details")];
            for (column, cell) in self.columns.iter().zip(item.cells(language)) {
                let label = self
                    .styles
                    .dialog_label
                    .clone()
                    .render(column.title(language));
                lines.push(format!("  {label}: {cell}"));
            }
            lines.push(
                self.styles
                    .help
                    .clone()
                    .render("e edit • d delete • esc close"),
            );
            return Some(lines.join("\n"));
        }
        if let Some(item) = self.dialog.pending_delete() {
            let name = item
                .cells(self.language())
                .into_iter()
                .next()
                .unwrap_or_default();
            let question = self
                .styles
                .confirm
                .clone()
                .render(&format!("Delete \"{name}\"? This cannot be undone."));
            let hint = self.styles.help.clone().render("y confirm • n cancel");
            return Some(format!("{question}\n{hint}"));
        }
        None
    }
}
