use cloudtui::api::FileRecord;
use cloudtui::logic::formatting::{format_size, format_timestamp};
use cloudtui::model::{NavigationPath, ViewMode};
use cloudtui::DisplayMode;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

const INFO_COLOR: Color = Color::Rgb(120, 120, 120);

fn icon(item: &FileRecord) -> &'static str {
    if item.is_folder() {
        "📁 "
    } else {
        "📄 "
    }
}

/// Right-hand info column for an entry (folders never show a size)
fn info_string(item: &FileRecord, display_mode: DisplayMode) -> String {
    let timestamp = item
        .created_at
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_default();

    match display_mode {
        DisplayMode::Off => String::new(),
        DisplayMode::TimestampOnly => timestamp,
        DisplayMode::TimestampAndSize if item.is_folder() => timestamp,
        DisplayMode::TimestampAndSize => {
            let size = format_size(item.size);
            if timestamp.is_empty() {
                size
            } else {
                format!("{:>9}  {}", size, timestamp)
            }
        }
    }
}

/// Build a list item with icon, name, and optional timestamp/size info
fn build_list_item(item: &FileRecord, panel_width: u16, display_mode: DisplayMode) -> ListItem<'_> {
    let icon = icon(item);
    let info = info_string(item, display_mode);

    let mut line_spans = vec![Span::raw(icon), Span::raw(item.name.as_str())];

    if !info.is_empty() {
        // panel_width - borders(2) - highlight(2) - padding(2)
        let available_width = panel_width.saturating_sub(6) as usize;
        let spacing = 2;

        // Use unicode width for proper emoji handling
        let name_width = icon.width() + item.name.width();
        let info_width = info.width();

        if name_width + spacing + info_width <= available_width {
            let padding = available_width - name_width - info_width;
            line_spans.push(Span::raw(" ".repeat(padding)));
            line_spans.push(Span::styled(info, Style::default().fg(INFO_COLOR)));
        }
    }

    ListItem::new(Line::from(line_spans))
}

/// Render the breadcrumb path: numbered segments, current one highlighted
pub fn render_path_bar(f: &mut Frame, area: Rect, path: &NavigationPath, view_mode: ViewMode) {
    let mut spans = Vec::new();
    let last = path.len() - 1;

    for (idx, entry) in path.entries().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" / ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("{}:", idx + 1),
            Style::default().fg(Color::Yellow),
        ));
        let style = if idx == last && view_mode == ViewMode::Folder {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(entry.name.as_str(), style));
    }

    if view_mode == ViewMode::Recent {
        spans.push(Span::styled(
            "  (viewing Recent)",
            Style::default().fg(Color::Magenta),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Path"));
    f.render_widget(paragraph, area);
}

/// Render the listing panel for the current folder or the Recent view
pub fn render_listing_panel(
    f: &mut Frame,
    area: Rect,
    items: &[FileRecord],
    selected: Option<usize>,
    title: &str,
    display_mode: DisplayMode,
    loading: bool,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if items.is_empty() {
        let text = if loading { "Loading..." } else { "No files here" };
        let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(Color::Gray)))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let panel_width = area.width;
    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| build_list_item(item, panel_width, display_mode))
        .collect();

    let list = List::new(list_items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);

    // Render scrollbar if list is longer than visible area
    let viewport_height = area.height.saturating_sub(2) as usize; // Subtract borders
    let total_items = items.len();

    if total_items > viewport_height {
        let mut scrollbar_state = ScrollbarState::new(total_items.saturating_sub(viewport_height))
            .position(state.offset());

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                horizontal: 0,
                vertical: 1,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudtui::api::EntryKind;

    fn record(name: &str, kind: EntryKind, size: u64) -> FileRecord {
        FileRecord {
            id: format!("id-{}", name),
            name: name.to_string(),
            kind,
            size,
            mimetype: None,
            parent_id: None,
            created_at: Some("2025-10-26T20:58:21".to_string()),
        }
    }

    #[test]
    fn test_info_off_is_empty() {
        let file = record("a.txt", EntryKind::File, 2048);
        assert_eq!(info_string(&file, DisplayMode::Off), "");
    }

    #[test]
    fn test_info_timestamp_only() {
        let file = record("a.txt", EntryKind::File, 2048);
        assert_eq!(info_string(&file, DisplayMode::TimestampOnly), "2025-10-26 20:58");
    }

    #[test]
    fn test_folders_never_show_size() {
        let folder = record("docs", EntryKind::Folder, 0);
        let info = info_string(&folder, DisplayMode::TimestampAndSize);
        assert_eq!(info, "2025-10-26 20:58");
    }

    #[test]
    fn test_files_show_size_and_timestamp() {
        let file = record("a.txt", EntryKind::File, 2048);
        let info = info_string(&file, DisplayMode::TimestampAndSize);
        assert!(info.contains("2.0 KB"));
        assert!(info.ends_with("2025-10-26 20:58"));
    }

    #[test]
    fn test_missing_timestamp_shows_size_only() {
        let mut file = record("a.txt", EntryKind::File, 10);
        file.created_at = None;
        assert_eq!(info_string(&file, DisplayMode::TimestampAndSize), "10 B");
    }
}
