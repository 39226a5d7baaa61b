//! Navigation-related state types.
//!
//! This module contains the discrete input events the form reacts to and the
//! focus movement primitives built on top of them.

use crossterm::event::KeyEvent;

/// Specifying the different form input events.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormEvent {
    /// Abort the whole form.
    Cancel,
    /// Focus the next field, or submit from the last one.
    Next,
    /// Focus the previous field, if any.
    Previous,
    /// Focus the next field, wrapping around.
    TabForward,
    /// Focus the previous field, wrapping around.
    TabBackward,
    /// Any other key, handled by the focused field.
    Edit(KeyEvent),
}

/// Specifying focus movement direction.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Move {
    Down,
    Up,
}

impl Move {
    pub fn step(self) -> isize {
        match self {
            Move::Down => 1,
            Move::Up => -1,
        }
    }
}

/// Specifying what happens when focus moves past either end.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Overflow {
    Rotate,
    Stop,
}

/// Return the destination index of a focus move over `len` fields, or
/// `None` when the move would leave the range and may not rotate.
///
pub fn destination(current: usize, len: usize, step: Move, overflow: Overflow) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let dest = current as isize + step.step();
    match overflow {
        Overflow::Rotate => Some(dest.rem_euclid(len as isize) as usize),
        Overflow::Stop if (0..len as isize).contains(&dest) => Some(dest as usize),
        Overflow::Stop => None,
    }
}
