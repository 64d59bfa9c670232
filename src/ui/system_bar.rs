use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the bar at the top of the screen: server and current view
pub fn render_system_bar(f: &mut Frame, area: Rect, base_url: &str, view_label: &str, signed_in: bool) {
    let session_span = if signed_in {
        Span::styled("🟢 Signed in", Style::default().fg(Color::Green))
    } else {
        Span::styled("🔴 Signed out", Style::default().fg(Color::Red))
    };

    let line = Line::from(vec![
        session_span,
        Span::raw(" | "),
        Span::styled(view_label.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled(base_url.to_string(), Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Cloud Storage"));
    f.render_widget(paragraph, area);
}
