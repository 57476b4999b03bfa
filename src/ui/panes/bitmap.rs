//! Bitmap pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the decoded bitmap rows.
///
/// Clamps `scroll_offset` to the content and returns the number of visible
/// rows, which the app uses as its page size.
pub fn render_bitmap_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[String],
    scroll_offset: &mut usize,
) -> usize {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // borders

    if rows.is_empty() {
        *scroll_offset = 0;
        let paragraph = Paragraph::new("(empty bitmap)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return visible_height;
    }

    let max_scroll = rows.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let items: Vec<ListItem> = rows
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|row| ListItem::new(row.as_str()).style(Style::default().fg(DEFAULT_THEME.ink)))
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
    visible_height
}
