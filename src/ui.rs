pub mod layout;
pub mod navbar;
pub mod style;

use ratatui::{
    layout::Rect,
    style::Style as RatStyle,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::util::{col_label, CellRef};
use layout::{grid_block, GridLayout, ScreenAreas};

pub fn render(frame: &mut Frame, app: &App) {
    let areas = ScreenAreas::new(frame.size());

    if let Some(bg) = app.style.background() {
        frame.render_widget(Block::default().style(RatStyle::default().bg(bg)), frame.size());
    }

    app.navbar.render(frame, &app.style, areas.navbar);
    render_grid(frame, app, areas.grid);
    render_status_bar(frame, app, areas.status);
    render_message_line(frame, app, areas.message);
}

/// Truncate to `width - 1` display columns and pad to exactly `width`
fn fit(text: &str, width: u16) -> String {
    let limit = width.saturating_sub(1) as usize;
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width as usize - used));
    out
}

fn center(text: &str, width: u16) -> String {
    let w = text.width().min(width as usize);
    let left = (width as usize - w) / 2;
    fit(&format!("{}{}", " ".repeat(left), text), width)
}

/// Slice of the edit buffer that keeps the cursor inside the cell,
/// with the cursor's display offset into that slice
fn editor_window(buffer: &str, cursor: usize, width: u16) -> (String, u16) {
    let limit = width.saturating_sub(1) as usize;
    let chars: Vec<char> = buffer.chars().collect();
    let cursor = cursor.min(chars.len());
    let span_width = |from: usize, to: usize| -> usize {
        chars[from..to].iter().map(|c| c.width().unwrap_or(0)).sum()
    };

    let mut start = 0;
    while start < cursor && span_width(start, cursor) > limit {
        start += 1;
    }
    let visible: String = chars[start..].iter().collect();
    (visible, span_width(start, cursor) as u16)
}

fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let grid = &app.grid;
    let view = &app.view;
    let layout = GridLayout::new(area, grid.row_count(), app.cell_width);
    let gutter = layout.gutter_width as usize;

    let first_col = view.viewport_col;
    let last_col = (first_col + layout.visible_cols()).min(grid.col_count());
    let first_row = view.viewport_row;
    let last_row = (first_row + layout.visible_rows()).min(grid.row_count());

    let mut lines: Vec<Line> = Vec::with_capacity(last_row - first_row + 1);

    // Header row with column letters
    let mut header: Vec<Span> = vec![Span::raw(" ".repeat(gutter))];
    for col in first_col..last_col {
        let style = app.style.header_col(col == view.active.col);
        header.push(Span::styled(center(&col_label(col), layout.cell_width), style));
    }
    lines.push(Line::from(header));

    let editing = app.mode.is_editing();
    let mut cursor_pos = None;

    for row in first_row..last_row {
        let row_style = app.style.row_number(row == view.active.row);
        let mut spans: Vec<Span> = vec![Span::styled(
            format!("{:>width$} ", row + 1, width = gutter - 1),
            row_style,
        )];

        for col in first_col..last_col {
            let cell_ref = CellRef::new(row, col);
            let Some(cell) = grid.get(cell_ref) else {
                continue;
            };

            if editing && view.is_active(cell_ref) {
                let (visible, offset) =
                    editor_window(app.edit_buffer(), app.edit_cursor(), layout.cell_width);
                spans.push(Span::styled(fit(&visible, layout.cell_width), app.style.cell_editing()));
                cursor_pos = Some((
                    layout.cell_x(col - first_col) + offset,
                    layout.cell_y(row - first_row),
                ));
                continue;
            }

            let mut style = app.style.cell_with_tags(&cell.styles);
            if view.is_active(cell_ref) {
                style = style.patch(app.style.cell_active());
            } else if app.selection.contains(cell_ref) {
                style = style.patch(app.style.cell_selection());
            }
            spans.push(Span::styled(fit(&cell.value, layout.cell_width), style));
        }

        lines.push(Line::from(spans));
    }

    let block = grid_block().title(format!(" {} ", app.navbar.active_name()));
    frame.render_widget(Paragraph::new(lines).block(block), area);

    if let Some((x, y)) = cursor_pos {
        frame.set_cursor(x, y);
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.view.active;
    let mut spans = vec![
        Span::styled(format!(" {} ", app.mode.display_name()), app.style.status_mode(app.mode)),
        Span::raw(format!(" {} ", active)),
    ];

    if let Some(range) = app.selection.range() {
        spans.push(Span::raw(format!("{} ({} cells) ", range, range.cell_count())));
    }

    if let Some(cell) = app.grid.get(active) {
        spans.push(Span::raw(format!("| {}", cell.value)));
        if !cell.styles.is_empty() {
            let tags: Vec<&str> = cell.styles.iter().map(|t| t.as_str()).collect();
            spans.push(Span::raw(format!(" [{}]", tags.join(", "))));
        }
    }

    let status = Paragraph::new(Line::from(spans)).style(app.style.status_bar());
    frame.render_widget(status, area);
}

fn render_message_line(frame: &mut Frame, app: &App, area: Rect) {
    let content = app.message.clone().unwrap_or_default();
    frame.render_widget(Paragraph::new(content).style(app.style.message()), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::grid::grid::Grid;
    use crate::ui::style::Style;

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer.get(x, y).symbol().to_string())
            .collect()
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        app.set_screen(Rect::new(0, 0, width, height));
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 6), "abc   ");
        assert_eq!(fit("abcdefgh", 6), "abcde ");
        assert_eq!(fit("日本語", 5), "日本 ");
        assert_eq!(fit("", 3), "   ");
    }

    #[test]
    fn test_editor_window_follows_cursor() {
        assert_eq!(editor_window("hello", 5, 10), ("hello".to_string(), 5));
        let (visible, offset) = editor_window("abcdefghij", 10, 6);
        assert_eq!(visible, "fghij");
        assert_eq!(offset, 5);
        let (visible, offset) = editor_window("abcdefghij", 2, 6);
        assert_eq!(visible, "abcdefghij");
        assert_eq!(offset, 2);
    }

    #[test]
    fn renders_headers_row_numbers_and_values() {
        let mut app = App::new(Grid::new(3, 3), Style::new(), 6);
        app.grid.get_mut(CellRef::new(1, 2)).unwrap().value = "hi".to_string();
        let buffer = draw(&mut app, 40, 10);

        assert!(row_text(&buffer, 0).contains("main"));
        let header = row_text(&buffer, 2);
        assert!(header.contains("A"));
        assert!(header.contains("C"));
        assert!(row_text(&buffer, 3).contains("  1 "));
        let second = row_text(&buffer, 4);
        assert!(second.contains("  2 "));
        assert!(second.contains("hi"));
        assert!(row_text(&buffer, 8).contains("READY"));
        assert!(row_text(&buffer, 8).contains("A1"));
    }

    #[test]
    fn active_cell_uses_active_style() {
        let mut app = App::new(Grid::new(3, 3), Style::new(), 6);
        let buffer = draw(&mut app, 40, 10);
        let layout = GridLayout::for_screen(Rect::new(0, 0, 40, 10), 3, 6);

        let active_bg = app.style.cell_active().bg;
        let cell = buffer.get(layout.cell_x(0), layout.cell_y(0));
        assert_eq!(Some(cell.bg), active_bg);
        let other = buffer.get(layout.cell_x(1), layout.cell_y(0));
        assert_ne!(Some(other.bg), active_bg);
    }

    #[test]
    fn status_bar_shows_selection() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut app = App::new(Grid::new(5, 5), Style::new(), 6);
        app.handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT));
        app.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT));
        let buffer = draw(&mut app, 50, 12);
        assert!(row_text(&buffer, 10).contains("A1:B2 (4 cells)"));
    }

    #[test]
    fn editing_shows_buffer_and_label() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut app = App::new(Grid::new(3, 3), Style::new(), 8);
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        app.handle_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE));
        let buffer = draw(&mut app, 40, 10);
        assert!(row_text(&buffer, 3).contains("xy"));
        assert!(row_text(&buffer, 8).contains("EDIT"));
    }
}
