use crate::error::AppResult;
use crate::state::{Form, FormEvent};
use crate::validation::Validator;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::*;

/// Source of terminal key events.
///
pub trait EventSource {
    /// Block until the next event. Returns `None` for events that carry no
    /// key press, such as a resize, which only call for a redraw.
    ///
    fn next_key(&mut self) -> AppResult<Option<KeyEvent>>;

    /// Receive the next event and hand it to the form. Returns result with
    /// value true if input should continue or false if the form ended.
    ///
    fn handle_next(&mut self, form: &mut Form, validator: &Validator) -> AppResult<bool> {
        match self.next_key()? {
            Some(key) => {
                let event = map_key(key);
                trace!("Processing terminal event '{:?}'...", event);
                Ok(form.handle(event, validator))
            }
            None => Ok(true),
        }
    }
}

/// Reads events from the terminal with crossterm.
///
pub struct Handler;

impl Handler {
    pub fn new() -> Self {
        Handler
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl EventSource for Handler {
    fn next_key(&mut self) -> AppResult<Option<KeyEvent>> {
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Translate a key into a form event.
///
pub fn map_key(key: KeyEvent) -> FormEvent {
    match key {
        KeyEvent {
            code: KeyCode::Esc, ..
        } => FormEvent::Cancel,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        } if modifiers.contains(KeyModifiers::CONTROL) => FormEvent::Cancel,
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers,
            ..
        } if modifiers.contains(KeyModifiers::CONTROL) => FormEvent::Next,
        KeyEvent {
            code: KeyCode::Enter | KeyCode::Down,
            ..
        } => FormEvent::Next,
        KeyEvent {
            code: KeyCode::Up, ..
        } => FormEvent::Previous,
        KeyEvent {
            code: KeyCode::BackTab,
            ..
        } => FormEvent::TabBackward,
        KeyEvent {
            code: KeyCode::Tab,
            modifiers,
            ..
        } if modifiers.contains(KeyModifiers::SHIFT) => FormEvent::TabBackward,
        KeyEvent {
            code: KeyCode::Tab, ..
        } => FormEvent::TabForward,
        _ => FormEvent::Edit(key),
    }
}

/// Replays a fixed list of keys.
///
#[cfg(test)]
pub struct ScriptedEvents {
    keys: std::collections::VecDeque<KeyEvent>,
}

#[cfg(test)]
impl ScriptedEvents {
    pub fn new(keys: Vec<KeyEvent>) -> Self {
        ScriptedEvents { keys: keys.into() }
    }

    /// Return the keys typed for `text` followed by `then`.
    ///
    pub fn typing(text: &str, then: KeyCode) -> Vec<KeyEvent> {
        text.chars()
            .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
            .chain(std::iter::once(KeyEvent::new(then, KeyModifiers::NONE)))
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
impl EventSource for ScriptedEvents {
    fn next_key(&mut self) -> AppResult<Option<KeyEvent>> {
        self.keys
            .pop_front()
            .map(Some)
            .ok_or_else(|| crate::error::AppError::Terminal("input closed".to_string()))
    }
}
