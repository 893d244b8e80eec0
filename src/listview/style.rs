//! Styling for the list-view controller.
//!
//! All defaults use `AdaptiveColor` so the table reads well on both
//! light and dark terminal themes. Every element can be restyled by
//! mutating the corresponding field before the first render.

use lipgloss_extras::prelude::*;

/// Unicode ellipsis character (…) used when a cell exceeds its column
/// width.
pub const ELLIPSIS: &str = "…";

/// Styling configuration for every element of a list view.
#[derive(Debug, Clone)]
pub struct ListViewStyles {
    /// Container for the title line.
    pub title_bar: Style,
    /// The view title text.
    pub title: Style,
    /// Column header cells.
    pub header: Style,
    /// The sort direction marker next to the sorted column.
    pub sort_marker: Style,
    /// A normal table row.
    pub row: Style,
    /// The row under the cursor.
    pub selected_row: Style,
    /// The marker on rows with a write in flight.
    pub busy_marker: Style,
    /// The search prompt label.
    pub search_prompt: Style,
    /// The active search term in the status line.
    pub search_term: Style,
    /// The status line (counts, refresh indicator).
    pub status_bar: Style,
    /// The "no items" message.
    pub no_items: Style,
    /// The error panel body.
    pub error: Style,
    /// The retry hint under the error panel.
    pub error_hint: Style,
    /// A dialog's title line.
    pub dialog_title: Style,
    /// A dialog's field labels.
    pub dialog_label: Style,
    /// The delete confirmation question.
    pub confirm: Style,
    /// The pagination line.
    pub pagination: Style,
    /// The help footer.
    pub help: Style,
}

impl Default for ListViewStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title_bar: Style::new().padding(0, 0, 1, 2),
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            header: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .bold(true),
            sort_marker: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            row: Style::new().foreground(AdaptiveColor {
                Light: "#4A4A4A",
                Dark: "#AAAAAA",
            }),
            selected_row: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            busy_marker: Style::new().foreground(subdued_color.clone()),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            search_term: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            status_bar: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(0, 0, 1, 2),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            error: Style::new()
                .foreground(Color::from("196"))
                .bold(true),
            error_hint: Style::new().foreground(subdued_color.clone()),
            dialog_title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            dialog_label: Style::new().foreground(subdued_color.clone()),
            confirm: Style::new()
                .foreground(Color::from("196"))
                .bold(true),
            pagination: Style::new()
                .foreground(subdued_color)
                .padding_left(2),
            help: Style::new().padding(1, 0, 0, 2),
        }
    }
}
