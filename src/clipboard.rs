//! Clipboard access behind a narrow trait.

use copypasta::{ClipboardContext, ClipboardProvider};

use crate::error::ClipboardError;

/// The one clipboard operation the panel needs.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via copypasta.
///
/// A missing backend (no display server, headless session) is tolerated at
/// construction so the panel stays interactive; each write then reports the
/// failure instead.
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let ctx = match ClipboardContext::new() {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard backend unavailable");
                None
            }
        };
        Self { ctx }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let Some(ctx) = self.ctx.as_mut() else {
            return Err(ClipboardError::Unavailable);
        };
        ctx.set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
