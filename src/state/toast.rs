//! Transient notifications

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Instant,
}

impl Toast {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: None,
            created_at: Instant::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Destructive,
            title: title.into(),
            description: Some(description.into()),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= TOAST_DURATION
    }
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    /// At most this many toasts are shown; older ones are dropped
    const LIMIT: usize = 3;

    pub fn push(&mut self, toast: Toast) {
        self.items.push(toast);
        if self.items.len() > Self::LIMIT {
            let excess = self.items.len() - Self::LIMIT;
            self.items.drain(..excess);
        }
    }

    /// Drop toasts that have been visible long enough
    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|t| !t.is_expired(now));
    }

    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.last()
    }
}
