//! Form state management module.
//!
//! This module contains the state behind the new user form, including:
//! - `Form`, the state machine owning focus and lifecycle
//! - `Field`, one text entry with its cached validation error
//! - Navigation types (input events, focus movement)

mod field;
mod form;
mod navigation;

pub use field::{Field, FieldKind, FieldStatus};
pub use form::{Form, Lifecycle};
pub use navigation::{FormEvent, Move, Overflow};
