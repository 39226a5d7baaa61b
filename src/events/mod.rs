//! Event handling module.
//!
//! This module turns terminal input into form events:
//! - Key mapping from crossterm key events to `FormEvent`
//! - Event sources, the real terminal or a scripted replay in tests

pub mod terminal;
