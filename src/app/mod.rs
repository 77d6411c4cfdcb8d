//! Panel controller: owns settings, charset, password slots, and tooltip.
//!
//! The controller is frontend-agnostic. It consumes [`UiEvent`]s with an
//! explicit `now`, which keeps the tooltip deadline testable against a
//! simulated clock.

mod tooltip;

pub use tooltip::{PLACEHOLDER, REVERT_AFTER, Tooltip};

use std::collections::HashSet;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use zeroize::Zeroize;

use crate::clipboard::Clipboard;
use crate::pass::{Charset, generate};
use crate::settings::Settings;

/// Input events the panel reacts to, independent of the terminal frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Increment,
    Decrement,
    /// A keystroke changed the length field; the payload is the full edit
    /// buffer, validated softly (upper bound only).
    LengthInput(String),
    /// The length field lost focus; the payload is clamped on both bounds
    /// and the display rewritten.
    LengthBlur(String),
    ToggleNumSym,
    Generate,
    Copy(usize),
    Tick,
}

/// One password display slot.
#[derive(Debug, Default)]
pub struct Slot {
    content: SlotContent,
}

#[derive(Debug, Default)]
pub enum SlotContent {
    #[default]
    Empty,
    Password(String),
    Error(String),
}

impl Slot {
    pub fn content(&self) -> &SlotContent {
        &self.content
    }

    pub fn password(&self) -> Option<&str> {
        match &self.content {
            SlotContent::Password(pwd) => Some(pwd),
            _ => None,
        }
    }

    fn set_password(&mut self, pwd: String) {
        self.wipe();
        self.content = SlotContent::Password(pwd);
    }

    fn set_error(&mut self, msg: String) {
        self.wipe();
        self.content = SlotContent::Error(msg);
    }

    fn wipe(&mut self) {
        if let SlotContent::Password(pwd) = &mut self.content {
            pwd.zeroize();
        }
    }
}

impl Drop for Slot {
    fn drop(&mut self) {
        self.wipe();
    }
}

pub struct App<C: Clipboard> {
    settings: Settings,
    charset: Charset,
    rng: SmallRng,
    slots: Vec<Slot>,
    /// Slots whose copy handler has been wired by a generation. Tracked
    /// here, not on the slot, so repeated generations wire each slot once.
    wired: HashSet<usize>,
    tooltip: Tooltip,
    length_display: String,
    clipboard: C,
}

impl<C: Clipboard> App<C> {
    pub fn new(clipboard: C, slot_count: usize) -> Self {
        let settings = Settings::default();
        let charset = Charset::new(settings.include_num_sym());
        let length_display = settings.length().to_string();
        Self {
            settings,
            charset,
            rng: SmallRng::from_entropy(),
            slots: (0..slot_count).map(|_| Slot::default()).collect(),
            wired: HashSet::new(),
            tooltip: Tooltip::new(),
            length_display,
            clipboard,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Text the length input field currently shows. While editing this can
    /// lag the stored (clamped) length below the minimum bound.
    pub fn length_display(&self) -> &str {
        &self.length_display
    }

    pub fn handle(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::Increment => {
                self.settings.increment();
                self.mirror_length();
            }
            UiEvent::Decrement => {
                self.settings.decrement();
                self.mirror_length();
            }
            UiEvent::LengthInput(raw) => {
                self.length_display = self.settings.set_length_live(&raw);
            }
            UiEvent::LengthBlur(raw) => {
                self.settings.set_length_commit(&raw);
                self.mirror_length();
            }
            UiEvent::ToggleNumSym => {
                let flag = !self.settings.include_num_sym();
                self.settings.set_include_num_sym(flag);
                self.charset.sync(flag);
            }
            UiEvent::Generate => self.generate_all(),
            UiEvent::Copy(index) => self.copy_slot(index, now),
            UiEvent::Tick => self.tooltip.tick(now),
        }
    }

    fn mirror_length(&mut self) {
        self.length_display = self.settings.length().to_string();
    }

    fn generate_all(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            match generate(self.settings.length(), self.charset.snapshot(), &mut self.rng) {
                Ok(pwd) => {
                    slot.set_password(pwd);
                    self.wired.insert(index);
                }
                Err(e) => slot.set_error(e.to_string()),
            }
        }
        tracing::debug!(
            slots = self.slots.len(),
            length = self.settings.length(),
            "generated passwords"
        );
    }

    fn copy_slot(&mut self, index: usize, now: Instant) {
        // Only slots a generation has wired respond to clicks.
        if !self.wired.contains(&index) {
            return;
        }
        let Some(text) = self.slots.get(index).and_then(Slot::password) else {
            return;
        };
        let text = text.to_owned();

        match self.clipboard.write_text(&text) {
            Ok(()) => {
                tracing::info!(slot = index, "password copied to clipboard");
                self.tooltip.show_copied(&text, now);
            }
            Err(e) => {
                tracing::warn!(error = %e, slot = index, "clipboard write failed");
                self.tooltip.show_failed(now);
            }
        }
    }
}
