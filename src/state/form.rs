//! Form state machine.
//!
//! The form owns the fields, which one has focus, and the lifecycle. Input
//! events either move focus, end the form, or are handed to the focused field.

use super::field::{Field, FieldKind};
use super::navigation::{destination, FormEvent, Move, Overflow};
use crate::validation::Validator;
use log::*;

/// Specifying the form lifecycle. Leaves `Filling` at most once.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lifecycle {
    Filling,
    Saving,
    Cancelling,
}

impl Lifecycle {
    pub fn is_terminal(self) -> bool {
        match self {
            Lifecycle::Filling => false,
            Lifecycle::Saving | Lifecycle::Cancelling => true,
        }
    }
}

/// Houses the new user form.
///
pub struct Form {
    fields: Vec<Field>,
    focus: usize,
    lifecycle: Lifecycle,
}

impl Form {
    /// Return a new empty form with focus on the first field.
    ///
    pub fn new() -> Self {
        let mut fields: Vec<Field> = FieldKind::ALL.iter().map(|k| Field::new(*k)).collect();
        if let Some(first) = fields.first_mut() {
            first.focus();
        }
        Form {
            fields,
            focus: 0,
            lifecycle: Lifecycle::Filling,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focused_kind(&self) -> FieldKind {
        self.fields[self.focus].kind()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, kind: FieldKind) -> &Field {
        &self.fields[kind.index()]
    }

    /// Return the current raw text of a field.
    ///
    pub fn value(&self, kind: FieldKind) -> String {
        self.field(kind).value()
    }

    /// Handle one input event. Returns true if the form keeps collecting
    /// input, false once the lifecycle is terminal.
    ///
    pub fn handle(&mut self, event: FormEvent, validator: &Validator) -> bool {
        if self.lifecycle.is_terminal() {
            warn!("Ignoring {:?} after form ended", event);
            return false;
        }

        match event {
            FormEvent::Cancel => self.finish(Lifecycle::Cancelling),
            FormEvent::Next => {
                if !self.change_focus(Move::Down, Overflow::Stop) {
                    self.finish(Lifecycle::Saving);
                }
            }
            FormEvent::Previous => {
                self.change_focus(Move::Up, Overflow::Stop);
            }
            FormEvent::TabForward => {
                self.change_focus(Move::Down, Overflow::Rotate);
            }
            FormEvent::TabBackward => {
                self.change_focus(Move::Up, Overflow::Rotate);
            }
            FormEvent::Edit(key) => {
                self.fields[self.focus].input(key, validator);
            }
        }

        !self.lifecycle.is_terminal()
    }

    /// Move focus, blurring the field left behind. Returns false if focus
    /// could not move.
    ///
    fn change_focus(&mut self, step: Move, overflow: Overflow) -> bool {
        match destination(self.focus, self.fields.len(), step, overflow) {
            Some(dest) => {
                self.fields[self.focus].blur();
                self.focus = dest;
                self.fields[self.focus].focus();
                debug!("Focused {} field", self.focused_kind().label());
                true
            }
            None => false,
        }
    }

    fn finish(&mut self, lifecycle: Lifecycle) {
        if self.lifecycle == Lifecycle::Filling {
            debug!("Form lifecycle {:?} -> {:?}", self.lifecycle, lifecycle);
            self.lifecycle = lifecycle;
        }
    }
}

impl Default for Form {
    fn default() -> Self {
        Form::new()
    }
}
