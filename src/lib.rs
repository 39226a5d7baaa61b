//! Interactive terminal form for creating a new user.
//!
//! The form collects an email and a password, validates both on every
//! keystroke, and on submission validates them once more, hashes the
//! password and stores the new user record.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod store;
pub mod submission;
pub mod ui;
pub mod validation;
