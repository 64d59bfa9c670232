//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title for the search box
///
/// `pending` means the typed query has not been applied to the listing yet.
fn search_title(active: bool, pending: bool, match_count: usize) -> String {
    if pending {
        " Search (waiting...) ".to_string()
    } else if active {
        format!(" Search ({} matches) - Esc to cancel ", match_count)
    } else {
        format!(" Search ({} matches) - Esc to clear ", match_count)
    }
}

/// Render search input box above legend
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Raw search input as typed
/// - `active`: Whether input is actively receiving keystrokes
/// - `pending`: Whether the debounce has not settled yet
/// - `match_count`: Number of entries currently shown
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    pending: bool,
    match_count: usize,
) {
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(search_title(active, pending, match_count))
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Match: "),
            Span::raw(query),
            Span::styled("█", cursor_style), // Blinking cursor
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Match: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    f.render_widget(Paragraph::new(vec![input_line]).block(block), area);
}
