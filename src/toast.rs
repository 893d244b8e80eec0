//! Transient success/failure notifications.
//!
//! A toast is raised by the list-view controller after a mutation
//! completes and dismisses itself after a few seconds via a tick
//! command. Each toast carries a unique id so a stale expiry message
//! can never dismiss a newer toast that replaced it.

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Message sent when a toast's display time elapses.
#[derive(Debug, Clone, Copy)]
pub struct ToastExpiredMsg {
    /// The toast this expiry belongs to.
    pub id: i64,
}

/// The severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// A completed mutation.
    Success,
    /// A failed mutation.
    Failure,
}

/// One transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    id: i64,
    /// Severity, controls the rendering color.
    pub level: ToastLevel,
    /// The message, already in the view's operating language.
    pub message: String,
}

impl Toast {
    /// Creates a success toast and the command that expires it.
    pub fn success(message: impl Into<String>) -> (Self, Cmd) {
        Self::raise(ToastLevel::Success, message)
    }

    /// Creates a failure toast and the command that expires it.
    pub fn failure(message: impl Into<String>) -> (Self, Cmd) {
        Self::raise(ToastLevel::Failure, message)
    }

    fn raise(level: ToastLevel, message: impl Into<String>) -> (Self, Cmd) {
        let id = next_id();
        let toast = Self {
            id,
            level,
            message: message.into(),
        };
        let cmd = tick(TOAST_DURATION, move |_| {
            Box::new(ToastExpiredMsg { id }) as Msg
        });
        (toast, cmd)
    }

    /// Whether an expiry message dismisses this toast.
    pub fn expires_with(&self, msg: &ToastExpiredMsg) -> bool {
        self.id == msg.id
    }

    /// Renders the toast with its severity color.
    pub fn view(&self) -> String {
        let style = match self.level {
            ToastLevel::Success => Style::new()
                .foreground(Color::from("42"))
                .bold(true),
            ToastLevel::Failure => Style::new()
                .foreground(Color::from("196"))
                .bold(true),
        };
        style.render(&self.message)
    }
}
