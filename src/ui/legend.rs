use cloudtui::model::ViewMode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the legend needs to know about the dashboard
#[derive(Clone, Copy, Debug)]
pub struct LegendContext {
    pub vim_mode: bool,
    pub view_mode: ViewMode,
    pub search_mode: bool,
    pub has_search_query: bool,
    pub at_root: bool,
}

fn key(k: &'static str) -> Span<'static> {
    Span::styled(k, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(ctx: LegendContext) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Typing into the search box: only the keys that leave it
    if ctx.search_mode {
        hotkey_spans.extend(vec![
            key("Enter"),
            Span::raw(":Keep Search  "),
            key("Esc"),
            Span::raw(":Clear Search  "),
            key("↑/↓"),
            Span::raw(":Nav"),
        ]);
        return hotkey_spans;
    }

    // Navigation keys (different for vim mode)
    if ctx.vim_mode {
        hotkey_spans.extend(vec![key("hjkl"), Span::raw(":Nav  ")]);
    } else {
        hotkey_spans.extend(vec![
            key("↑/↓"),
            Span::raw(":Nav  "),
            key("Enter"),
            Span::raw(":Open  "),
        ]);
    }

    if ctx.view_mode == ViewMode::Recent {
        hotkey_spans.extend(vec![key("←"), Span::raw(":Back to Folder  ")]);
    } else {
        if !ctx.at_root {
            hotkey_spans.extend(vec![key("←"), Span::raw(":Up  ")]);
        }
        hotkey_spans.extend(vec![key("1-9"), Span::raw(":Jump  ")]);

        // Search key - contextual based on search state
        if ctx.has_search_query {
            hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Search  ")]);
        } else {
            let search_key = if ctx.vim_mode { "/" } else { "^F" };
            hotkey_spans.extend(vec![key(search_key), Span::raw(":Search  ")]);
        }
    }

    hotkey_spans.extend(vec![
        key("H"),
        Span::raw(":Home  "),
        key("r"),
        Span::raw(":Recent  "),
        key("n"),
        Span::raw(":New Folder  "),
        key("u"),
        Span::raw(":Upload  "),
        key("s"),
        Span::raw(":Sort  "),
        key("S"),
        Span::raw(":Reverse  "),
        key("t"),
        Span::raw(":Info  "),
        key("L"),
        Span::raw(":Logout  "),
    ]);

    // Quit - always available
    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, ctx: LegendContext) {
    let legend = Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, ctx: LegendContext) -> u16 {
    // Count lines without the block; line_count() ignores borders
    let paragraph_for_counting = Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))])
        .wrap(ratatui::widgets::Wrap { trim: false });

    // Calculate available width (subtract left + right borders)
    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn ctx() -> LegendContext {
        LegendContext {
            vim_mode: false,
            view_mode: ViewMode::Folder,
            search_mode: false,
            has_search_query: false,
            at_root: true,
        }
    }

    #[test]
    fn test_search_key_depends_on_vim_mode() {
        let text = spans_to_text(&build_hotkey_spans(ctx()));
        assert!(text.contains("^F:Search"), "got: {}", text);

        let vim = LegendContext { vim_mode: true, ..ctx() };
        let text = spans_to_text(&build_hotkey_spans(vim));
        assert!(text.contains("/:Search"), "got: {}", text);
    }

    #[test]
    fn test_up_hidden_at_root() {
        let text = spans_to_text(&build_hotkey_spans(ctx()));
        assert!(!text.contains(":Up"));

        let nested = LegendContext { at_root: false, ..ctx() };
        let text = spans_to_text(&build_hotkey_spans(nested));
        assert!(text.contains("←:Up"));
    }

    #[test]
    fn test_recent_view_has_no_search_or_jump() {
        let recent = LegendContext { view_mode: ViewMode::Recent, ..ctx() };
        let text = spans_to_text(&build_hotkey_spans(recent));
        assert!(text.contains("Back to Folder"));
        assert!(!text.contains(":Search"));
        assert!(!text.contains(":Jump"));
    }

    #[test]
    fn test_search_mode_shows_exit_keys_only() {
        let typing = LegendContext { search_mode: true, ..ctx() };
        let text = spans_to_text(&build_hotkey_spans(typing));
        assert!(text.contains("Esc:Clear Search"));
        assert!(!text.contains("q:Quit"));
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(400, ctx());
        let narrow = calculate_legend_height(40, ctx());
        assert_eq!(wide, 3);
        assert!(narrow > wide);
    }
}
