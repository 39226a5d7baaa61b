mod form;

use super::*;
use crate::state::Form;

/// Render the whole screen for the current form state.
///
pub fn render(frame: &mut Frame, state: &Form) {
    let size = frame.size();
    form::form(frame, size, state);
}
