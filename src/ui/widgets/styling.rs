use ratatui::style::{Color, Modifier, Style};

const GREEN: Color = Color::Indexed(70);
const RED: Color = Color::Indexed(1);
const PURPLE: Color = Color::Indexed(63);
const YELLOW: Color = Color::Indexed(228);
const GREY: Color = Color::Indexed(240);

/// Return the style for the form title banner.
///
pub fn banner_style() -> Style {
    Style::default()
        .bg(PURPLE)
        .fg(YELLOW)
        .add_modifier(Modifier::BOLD)
}

/// Return the style for field labels.
///
pub fn label_style() -> Style {
    Style::default().fg(PURPLE)
}

/// Return the style for focused field labels.
///
pub fn active_label_style() -> Style {
    label_style().add_modifier(Modifier::BOLD)
}

/// Return the style for a passing rule glyph.
///
pub fn pass_style() -> Style {
    Style::default().fg(GREEN)
}

/// Return the style for a failing rule glyph.
///
pub fn fail_style() -> Style {
    Style::default().fg(RED)
}

/// Return the style for muted help text.
///
pub fn muted_text_style() -> Style {
    Style::default().fg(GREY)
}
