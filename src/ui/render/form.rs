use super::Frame;
use crate::state::{Field, FieldStatus, Form, Lifecycle};
use crate::ui::widgets::styling;
use crate::validation::{FAIL_GLYPH, PASS_GLYPH};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

const TITLE: &str = " New User ";
const SUBMIT_HINT: &str = "press Enter until the end or Ctrl+s to submit the form";
const LABEL_WIDTH: u16 = 10;

/// Render the new user form. Draws nothing once the form ended.
///
pub fn form(frame: &mut Frame, size: Rect, form: &Form) {
    if form.lifecycle() != Lifecycle::Filling {
        return;
    }

    let field_lines: Vec<Vec<Line>> = form.fields().iter().map(status_lines).collect();

    let mut constraints = vec![
        Constraint::Length(1), // Title
        Constraint::Length(1),
    ];
    for lines in &field_lines {
        constraints.push(Constraint::Length(1 + lines.len() as u16));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1)); // Hint
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .vertical_margin(1)
        .constraints(constraints)
        .split(size);

    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, styling::banner_style())),
        chunks[0],
    );

    for (idx, (field, lines)) in form.fields().iter().zip(field_lines).enumerate() {
        render_field(frame, chunks[2 + idx * 2], field, lines);
    }

    let hint_idx = 2 + form.fields().len() * 2;
    frame.render_widget(
        Paragraph::new(Span::styled(SUBMIT_HINT, styling::muted_text_style())),
        chunks[hint_idx],
    );
}

fn render_field(frame: &mut Frame, size: Rect, field: &Field, lines: Vec<Line<'static>>) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
        .split(size);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(columns[1]);

    let label_style = if field.is_focused() {
        styling::active_label_style()
    } else {
        styling::label_style()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(field.kind().label(), label_style)),
        columns[0],
    );
    frame.render_widget(field.textarea().widget(), rows[0]);
    frame.render_widget(Paragraph::new(lines), rows[1]);
}

/// Lines shown under a field's text.
///
fn status_lines(field: &Field) -> Vec<Line<'static>> {
    match field.status() {
        FieldStatus::Required => vec![rule_line(true, "required")],
        FieldStatus::Good => vec![rule_line(false, "good")],
        FieldStatus::Invalid(failure) => failure
            .result()
            .rules()
            .iter()
            .map(|rule| rule_line(rule.failed, rule.description))
            .collect(),
    }
}

fn rule_line(failed: bool, text: &'static str) -> Line<'static> {
    let glyph = if failed {
        Span::styled(FAIL_GLYPH, styling::fail_style())
    } else {
        Span::styled(PASS_GLYPH, styling::pass_style())
    };
    Line::from(vec![glyph, Span::raw(" "), Span::raw(text)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormEvent;
    use crate::store::MemoryStore;
    use crate::validation::{Hasher, Validator};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(form: &Form) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|frame| {
                let size = frame.size();
                super::form(frame, size, form)
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn type_text(form: &mut Form, text: &str, validator: &Validator) {
        for c in text.chars() {
            form.handle(
                FormEvent::Edit(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
                validator,
            );
        }
    }

    #[test]
    fn empty_form_shows_required_fields() {
        let screen = draw(&Form::new()).join("\n");
        assert!(screen.contains("New User"));
        assert!(screen.contains("email"));
        assert!(screen.contains("password"));
        assert_eq!(screen.matches("✗ required").count(), 2);
        assert!(screen.contains(SUBMIT_HINT));
    }

    #[test]
    fn filled_form_shows_rules() {
        let store = MemoryStore::seeded();
        let hasher = Hasher::with_params(8, 1, 1).unwrap();
        let validator = Validator::new(&store, &hasher);
        let mut form = Form::new();
        type_text(&mut form, "new@test.com", &validator);
        form.handle(FormEvent::TabForward, &validator);
        type_text(&mut form, "abc", &validator);

        let screen = draw(&form).join("\n");
        assert!(screen.contains("✓ good"));
        assert!(screen.contains("✗ has 10 characters or more"));
        assert!(screen.contains("✓ has less than 72 bytes"));
        assert!(screen.contains("✓ has a lowercase letter"));
        assert!(screen.contains("•••"));
        assert!(!screen.contains("abc"));
    }

    #[test]
    fn ended_form_draws_nothing() {
        let store = MemoryStore::new();
        let hasher = Hasher::with_params(8, 1, 1).unwrap();
        let validator = Validator::new(&store, &hasher);
        let mut form = Form::new();
        form.handle(FormEvent::Cancel, &validator);

        let screen = draw(&form);
        assert!(screen.iter().all(|row| row.trim().is_empty()));
    }
}
