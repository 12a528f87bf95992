//! Generic table widget over any [`RowSource`].
//!
//! The widget knows nothing about media files: it draws a header line and
//! as many rows as fit, keeping the selected row in view.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Widget},
};

use crate::browser::RowSource;

pub struct RowTable<'a, S: RowSource> {
    source: &'a S,
    widths: &'a [Constraint],
    selected: Option<usize>,
    block: Option<Block<'a>>,
}

impl<'a, S: RowSource> RowTable<'a, S> {
    pub fn new(source: &'a S, widths: &'a [Constraint]) -> Self {
        Self {
            source,
            widths,
            selected: None,
            block: None,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl<S: RowSource> Widget for RowTable<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let header_area = Rect { height: 1, ..inner };
        let columns = Layout::horizontal(self.widths.iter().copied())
            .spacing(1)
            .split(header_area);

        let header_style = Style::default().fg(Color::Cyan).bold();
        for (col, header) in self.source.headers().iter().enumerate() {
            if let Some(cell) = columns.get(col) {
                buf.set_stringn(cell.x, cell.y, header, cell.width as usize, header_style);
            }
        }

        let body_height = inner.height.saturating_sub(1) as usize;
        let total = self.source.row_count();
        let selected = self.selected.unwrap_or(0);
        let offset = scroll_offset(selected, body_height, total);

        for (i, row) in (offset..total).take(body_height).enumerate() {
            let y = inner.y + 1 + i as u16;
            let row_area = Rect {
                y,
                height: 1,
                ..inner
            };

            let style = if self.selected == Some(row) {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            buf.set_style(row_area, style);

            for (col, cell) in columns.iter().enumerate() {
                let Some(text) = self.source.cell(row, col) else {
                    continue;
                };
                let text = truncate(text, cell.width as usize);
                buf.set_stringn(cell.x, y, text, cell.width as usize, style);
            }
        }
    }
}

/// First visible row so that `selected` stays on screen with a little context.
pub fn scroll_offset(selected: usize, visible_height: usize, total: usize) -> usize {
    if total <= visible_height {
        return 0;
    }

    let padding = 3.min(visible_height / 4);

    if selected < padding {
        0
    } else if selected >= total - padding {
        total.saturating_sub(visible_height)
    } else {
        selected.saturating_sub(padding)
    }
}

fn truncate(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width && width > 1 {
        let truncated: String = text.chars().take(width - 1).collect();
        format!("{}…", truncated)
    } else {
        text.to_string()
    }
}
