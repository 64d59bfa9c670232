use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;

/// Render a single-line text prompt (new folder, upload path)
///
/// `error` is shown under the input; the dialog stays open until the
/// operation succeeds or the user cancels.
pub fn render_text_prompt(
    f: &mut Frame,
    title: &str,
    label: &str,
    input: &str,
    error: Option<&str>,
) {
    let mut lines = vec![
        Line::from(Span::raw(label.to_string())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(input.to_string()),
            Span::styled(
                "█",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]),
        Line::from(""),
    ];

    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Enter to confirm, Esc to cancel",
        Style::default().fg(Color::Gray),
    )));

    let prompt_height = lines.len() as u16 + 2;
    let prompt_area = centered_rect(f.area(), 60, prompt_height);

    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
