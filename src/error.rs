//! Error types for the panel core.

use thiserror::Error;

/// The character set has no entries to sample from.
///
/// Unreachable while letters are always part of the set, but generation
/// refuses to hand back an empty string silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("character set is empty")]
pub struct EmptyCharsetError;

/// A clipboard write did not land.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard backend available")]
    Unavailable,
    #[error("clipboard write failed: {0}")]
    Write(String),
}
