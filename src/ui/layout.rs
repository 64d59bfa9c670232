use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top system bar area
    pub system_area: Rect,
    /// Breadcrumb path line
    pub path_area: Rect,
    /// Listing panel area
    pub listing_area: Rect,
    /// Search input area (if visible)
    pub search_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the dashboard layout
pub fn calculate_layout(terminal_size: Rect, legend_height: u16, search_visible: bool) -> LayoutInfo {
    let search_height = if search_visible { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // System bar (top border, text, bottom border)
            Constraint::Length(3),             // Breadcrumb path
            Constraint::Min(3),                // Listing
            Constraint::Length(search_height), // Search input (3 lines when visible, 0 when hidden)
            Constraint::Length(legend_height), // Legend area (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        system_area: chunks[0],
        path_area: chunks[1],
        listing_area: chunks[2],
        search_area: if search_visible { Some(chunks[3]) } else { None },
        legend_area: chunks[4],
        status_area: chunks[5],
    }
}

/// Center a `width` x `height` box inside `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_row_only_when_visible() {
        let size = Rect::new(0, 0, 100, 40);

        let hidden = calculate_layout(size, 3, false);
        assert!(hidden.search_area.is_none());

        let shown = calculate_layout(size, 3, true);
        let search = shown.search_area.unwrap();
        assert_eq!(search.height, 3);
        assert!(shown.listing_area.height < hidden.listing_area.height);
    }

    #[test]
    fn test_bars_keep_fixed_height() {
        let info = calculate_layout(Rect::new(0, 0, 80, 30), 4, false);
        assert_eq!(info.system_area.height, 3);
        assert_eq!(info.path_area.height, 3);
        assert_eq!(info.legend_area.height, 4);
        assert_eq!(info.status_area.height, 3);
        assert_eq!(info.status_area.y + info.status_area.height, 30);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_rect(area, 60, 20);
        assert_eq!(r, area);

        let r = centered_rect(area, 20, 4);
        assert_eq!((r.x, r.y, r.width, r.height), (10, 3, 20, 4));
    }
}
