use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Status line text for the listing
fn status_text(
    item_count: usize,
    selected_name: Option<&str>,
    sort_mode: &str,
    sort_reverse: bool,
    loading: bool,
) -> String {
    let sort = if sort_reverse {
        format!("{} ↓", sort_mode)
    } else {
        sort_mode.to_string()
    };
    let state = if loading { "Loading..." } else { "" };

    format!(
        "{:<12} │ Sort: {:<12} │ {:<30} │ {}",
        format!("{} items", item_count),
        sort,
        selected_name.unwrap_or("-"),
        state
    )
}

/// Render the bottom status bar; an error replaces the metrics line
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    item_count: usize,
    selected_name: Option<&str>,
    sort_mode: &str,
    sort_reverse: bool,
    loading: bool,
    error: Option<&str>,
) {
    let line = match error {
        Some(error) => Line::from(vec![
            Span::styled("Error: ", Style::default().fg(Color::Red)),
            Span::styled(error.to_string(), Style::default().fg(Color::Red)),
        ]),
        None => Line::from(Span::raw(status_text(
            item_count,
            selected_name,
            sort_mode,
            sort_reverse,
            loading,
        ))),
    };

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}
