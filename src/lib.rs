//! Casual-use password generator with an interactive terminal panel.
//!
//! Generates random passwords from a configurable character pool and copies
//! them to the system clipboard on click. Deliberately built on a fast,
//! non-cryptographic RNG: this is a convenience tool, not a vault.

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod error;
pub mod exits;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use settings::Settings;
