//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library. The view
//! is a pure function of the form state.

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod widgets;

pub use render::render;
