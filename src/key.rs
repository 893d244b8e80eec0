//! Type-safe key bindings with help metadata.
//!
//! A [`Binding`] couples one logical action to a set of key presses and
//! a help entry (`"←/h", "prev page"`). Components expose their
//! bindings through the [`KeyMap`] trait so a footer help line can be
//! assembled without knowing anything about the component itself.
//!
//! Bindings can be disabled at runtime; a disabled binding never
//! matches and is skipped by help rendering. The list-view controller
//! uses this to grey out pagination at the collection bounds.
//!
//! # Examples
//!
//! ```
//! use backoffice_widgets::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
//! assert_eq!(confirm.help().0, "enter");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// One logical action bound to a set of key presses.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help_keys: String,
    help_desc: String,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key presses. Plain `KeyCode`s imply no
    /// modifiers; pass `(KeyCode, KeyModifiers)` tuples for chords.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help_keys: String::new(),
            help_desc: String::new(),
            disabled: false,
        }
    }

    /// Attaches the help entry shown in footer help lines.
    pub fn with_help(mut self, keys: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help_keys = keys.into();
        self.help_desc = desc.into();
        self
    }

    /// The `(keys, description)` help entry.
    pub fn help(&self) -> (&str, &str) {
        (&self.help_keys, &self.help_desc)
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding currently matches anything.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// Whether a key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        !self.disabled
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.modifiers == msg.modifiers)
    }
}

/// Help metadata for a component's key bindings.
pub trait KeyMap {
    /// The bindings shown in the compact one-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns, for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders a compact `key desc • key desc` help line from a key map,
/// skipping disabled bindings and bindings without help text.
pub fn short_help_view<K: KeyMap>(keymap: &K) -> String {
    let mut parts = Vec::new();
    for binding in keymap.short_help() {
        let (keys, desc) = binding.help();
        if binding.enabled() && !keys.is_empty() {
            parts.push(format!("{} {}", keys, desc));
        }
    }
    parts.join(" • ")
}
