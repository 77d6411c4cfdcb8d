//! Clipboard-copy feedback tooltip.

use std::time::{Duration, Instant};

pub const PLACEHOLDER: &str = "Copy to clipboard";
pub const REVERT_AFTER: Duration = Duration::from_millis(2000);

/// Transient feedback line under the password slots.
///
/// Holds at most one pending revert deadline; showing new feedback replaces
/// it, so rapid copies never race two timers.
#[derive(Debug)]
pub struct Tooltip {
    text: String,
    visible: bool,
    failed: bool,
    revert_at: Option<Instant>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self {
            text: PLACEHOLDER.to_string(),
            visible: false,
            failed: false,
            revert_at: None,
        }
    }

    /// Confirm a copy that actually landed on the clipboard.
    pub fn show_copied(&mut self, text: &str, now: Instant) {
        self.show(format!("Copied: {text}"), false, now);
    }

    /// Report a copy that did not land.
    pub fn show_failed(&mut self, now: Instant) {
        self.show("Copy failed".to_string(), true, now);
    }

    /// Revert to the hidden placeholder once the deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.revert_at
            && now >= at
        {
            self.revert_at = None;
            self.visible = false;
            self.failed = false;
            self.text = PLACEHOLDER.to_string();
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    fn show(&mut self, text: String, failed: bool, now: Instant) {
        self.text = text;
        self.visible = true;
        self.failed = failed;
        self.revert_at = Some(now + REVERT_AFTER);
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}
