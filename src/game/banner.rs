use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A widget for displaying a pop-up message over the board
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Banner {
    title: &'static str,
    lines: Vec<Line<'static>>,
}

impl Banner {
    /*
     * ┌───── PAUSED ──────┐
     * │ Press p to resume │
     * └───────────────────┘
     */
    pub(super) fn paused() -> Banner {
        Banner {
            title: " PAUSED ",
            lines: vec![Line::from_iter([
                Span::raw("Press "),
                Span::styled("p", consts::KEY_STYLE),
                Span::raw(" to resume"),
            ])],
        }
    }

    /*
     * ┌────── GAME OVER ──────┐
     * │ Final score: 3        │
     * │ Restart (r)  Quit (q) │
     * └───────────────────────┘
     */
    pub(super) fn game_over(score: u32) -> Banner {
        Banner {
            title: " GAME OVER ",
            lines: vec![
                Line::raw(format!("Final score: {score}")),
                Line::from_iter([
                    Span::raw("Restart ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(")  Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ]),
            ],
        }
    }

    /// The size of the `Rect` that should be passed to `Banner::render()`
    pub(super) fn size(&self) -> Size {
        let text_width = self.lines.iter().map(Line::width).max().unwrap_or(0);
        let title_width = self.title.chars().count().saturating_add(2);
        let width = text_width.saturating_add(4).max(title_width);
        Size {
            width: u16::try_from(width).unwrap_or(u16::MAX),
            height: u16::try_from(self.lines.len().saturating_add(2)).unwrap_or(u16::MAX),
        }
    }
}

impl Widget for Banner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(self.title)
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        for (line, row) in self.lines.into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
