//! Form field state.
//!
//! Each field owns its text and the validation error cached from the last
//! edit. The "required" status is derived from empty text and never stored.

use crate::validation::{ValidationFailure, Validator};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::*;
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

const PASSWORD_MASK: char = '•';

/// Specifying the form fields, in display order.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldKind {
    Email,
    Password,
}

impl FieldKind {
    pub const ALL: [FieldKind; 2] = [FieldKind::Email, FieldKind::Password];

    pub fn index(self) -> usize {
        match self {
            FieldKind::Email => 0,
            FieldKind::Password => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKind::Email => "firstname.surname@domain.com",
            FieldKind::Password => "v3rySTRONG-p@55word (don't copy this one…)",
        }
    }

    /// Run this field's validator over `text`.
    ///
    fn validate(self, text: &str, validator: &Validator) -> Option<ValidationFailure> {
        let outcome = match self {
            FieldKind::Email => validator.email(text),
            FieldKind::Password => validator.password(text),
        };
        outcome.err()
    }
}

/// Displayed status of a field.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FieldStatus<'a> {
    Required,
    Good,
    Invalid(&'a ValidationFailure),
}

/// Single-line text entry with a cached validation error.
///
pub struct Field {
    kind: FieldKind,
    textarea: TextArea<'static>,
    error: Option<ValidationFailure>,
    focused: bool,
}

impl Field {
    /// Return a new empty, blurred field.
    ///
    pub fn new(kind: FieldKind) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(kind.placeholder());
        textarea.set_cursor_line_style(Style::default());
        if kind == FieldKind::Password {
            textarea.set_mask_char(PASSWORD_MASK);
        }
        let mut field = Field {
            kind,
            textarea,
            error: None,
            focused: true,
        };
        field.blur();
        field
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Return the current text.
    ///
    pub fn value(&self) -> String {
        self.textarea.lines().concat()
    }

    pub fn error(&self) -> Option<&ValidationFailure> {
        self.error.as_ref()
    }

    pub fn status(&self) -> FieldStatus<'_> {
        if self.value().is_empty() {
            FieldStatus::Required
        } else {
            match &self.error {
                Some(failure) => FieldStatus::Invalid(failure),
                None => FieldStatus::Good,
            }
        }
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Show the cursor.
    ///
    pub fn focus(&mut self) {
        self.focused = true;
        self.textarea
            .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    }

    /// Hide the cursor.
    ///
    pub fn blur(&mut self) {
        self.focused = false;
        self.textarea.set_cursor_style(Style::default());
    }

    /// Apply an editing key and re-run the validator when the text changed.
    /// Returns true if the text changed.
    ///
    pub fn input(&mut self, key: KeyEvent, validator: &Validator) -> bool {
        if breaks_line(&key) {
            return false;
        }
        if !self.textarea.input(key) {
            return false;
        }
        self.error = self.kind.validate(&self.value(), validator);
        trace!(
            "Revalidated {} field: {}",
            self.kind.label(),
            if self.error.is_some() { "invalid" } else { "good" }
        );
        true
    }
}

/// Fields hold a single line.
///
fn breaks_line(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::validation::Hasher;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(field: &mut Field, text: &str, validator: &Validator) {
        for c in text.chars() {
            field.input(key(KeyCode::Char(c)), validator);
        }
    }

    #[test]
    fn test_field_kind() {
        assert_eq!(FieldKind::Email.index(), 0);
        assert_eq!(FieldKind::Password.index(), 1);
        assert_eq!(FieldKind::ALL.len(), 2);
        assert_eq!(FieldKind::Email.label(), "email");
        assert_eq!(FieldKind::Password.label(), "password");
    }

    #[test]
    fn new_field_is_required_and_blurred() {
        let field = Field::new(FieldKind::Email);
        assert_eq!(field.value(), "");
        assert_eq!(field.status(), FieldStatus::Required);
        assert!(!field.is_focused());
    }

    #[test]
    fn typing_revalidates() {
        let store = MemoryStore::seeded();
        let hasher = Hasher::with_params(8, 1, 1).unwrap();
        let validator = Validator::new(&store, &hasher);
        let mut field = Field::new(FieldKind::Email);

        type_text(&mut field, "new@test", &validator);
        assert_eq!(field.value(), "new@test");
        assert_eq!(field.status(), FieldStatus::Good);

        type_text(&mut field, "@", &validator);
        assert!(matches!(field.status(), FieldStatus::Invalid(_)));

        field.input(key(KeyCode::Backspace), &validator);
        assert_eq!(field.status(), FieldStatus::Good);
    }

    #[test]
    fn taken_email_is_invalid() {
        let store = MemoryStore::seeded();
        let hasher = Hasher::with_params(8, 1, 1).unwrap();
        let validator = Validator::new(&store, &hasher);
        let mut field = Field::new(FieldKind::Email);

        type_text(&mut field, "tac@hi.com", &validator);
        let failure = field.error().unwrap();
        assert!(failure.result().rules()[1].failed);
    }

    #[test]
    fn emptied_field_is_required_again() {
        let store = MemoryStore::new();
        let hasher = Hasher::with_params(8, 1, 1).unwrap();
        let validator = Validator::new(&store, &hasher);
        let mut field = Field::new(FieldKind::Password);

        type_text(&mut field, "ab", &validator);
        assert!(matches!(field.status(), FieldStatus::Invalid(_)));
        field.input(key(KeyCode::Backspace), &validator);
        field.input(key(KeyCode::Backspace), &validator);
        assert_eq!(field.status(), FieldStatus::Required);
    }

    #[test]
    fn enter_does_not_break_line() {
        let store = MemoryStore::new();
        let hasher = Hasher::with_params(8, 1, 1).unwrap();
        let validator = Validator::new(&store, &hasher);
        let mut field = Field::new(FieldKind::Email);

        type_text(&mut field, "a@b", &validator);
        assert!(!field.input(key(KeyCode::Enter), &validator));
        assert!(!field.input(
            KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL),
            &validator
        ));
        assert_eq!(field.textarea().lines().len(), 1);
        assert_eq!(field.value(), "a@b");
    }

    #[test]
    fn cursor_movement_keeps_error() {
        let store = MemoryStore::new();
        let hasher = Hasher::with_params(8, 1, 1).unwrap();
        let validator = Validator::new(&store, &hasher);
        let mut field = Field::new(FieldKind::Password);

        type_text(&mut field, "short", &validator);
        let before = field.error().cloned();
        assert!(!field.input(key(KeyCode::Left), &validator));
        assert_eq!(field.error().cloned(), before);
    }

    #[test]
    fn focus_and_blur() {
        let mut field = Field::new(FieldKind::Password);
        field.focus();
        assert!(field.is_focused());
        field.blur();
        assert!(!field.is_focused());
    }
}
