//! Login Screen UI

use cloudtui::model::{LoginField, LoginForm};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect;

fn field_line<'a>(label: &'a str, value: String, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled(format!("{:<10}", label), label_style), Span::raw(value)];
    if focused {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

/// Render the login form centered on screen
pub fn render_login(f: &mut Frame, form: &LoginForm, base_url: &str, error: Option<&str>) {
    let masked = "*".repeat(form.password.chars().count());

    let mut lines = vec![
        Line::from(Span::styled(base_url.to_string(), Style::default().fg(Color::Gray))),
        Line::from(""),
        field_line("Email", form.email.clone(), form.focus == LoginField::Email),
        field_line("Password", masked, form.focus == LoginField::Password),
        Line::from(""),
    ];

    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Tab: switch field  Enter: log in  Esc: quit",
        Style::default().fg(Color::Gray),
    )));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(f.area(), 56, height);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Log in")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
