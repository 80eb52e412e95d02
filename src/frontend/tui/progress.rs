//! Progress indicator widgets
//!
//! The linear bar fills cell backgrounds up to the given ratio with a
//! centered percentage readout. The circular indicator is presentational
//! only, a fixed spinner glyph next to its label.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Determinate progress bar driven by a [0.0, 1.0] ratio
pub struct LinearProgress {
    ratio: f32,
}

impl LinearProgress {
    pub fn new(ratio: f32) -> Self {
        Self { ratio }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 1 {
            return;
        }

        let ratio = self.ratio.clamp(0.0, 1.0);
        let split = (area.width as f32 * ratio).round() as u16;
        let text = format!("{:.0}%", ratio * 100.0);
        let text_start = area.x + (area.width.saturating_sub(text.len() as u16)) / 2;

        let y = area.y;
        if y >= buf.area().height {
            return;
        }
        for i in 0..area.width {
            let x = area.x + i;
            if x >= buf.area().width {
                break;
            }
            buf[(x, y)].set_char(' ');
            if i < split {
                buf[(x, y)].set_bg(Color::Cyan);
            } else {
                buf[(x, y)].set_bg(Color::DarkGray);
            }
        }

        for (i, c) in text.chars().enumerate() {
            let x = text_start + i as u16;
            if x < area.x + area.width && x < buf.area().width {
                buf[(x, y)].set_char(c);
                buf[(x, y)].set_fg(Color::White);
            }
        }
    }
}

/// Indeterminate progress glyph with a label
pub struct CircularProgress<'a> {
    label: &'a str,
}

impl<'a> CircularProgress<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let line = Line::from(vec![
            Span::styled("◐", Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(self.label, Style::default().fg(Color::Gray)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
