//! Switch widget: a small track with the knob at either end

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Switch<'a> {
    label: &'a str,
    on: bool,
    focused: bool,
}

impl<'a> Switch<'a> {
    pub fn new(label: &'a str, on: bool) -> Self {
        Self {
            label,
            on,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 6 || area.height < 1 {
            return;
        }

        let (track, track_color) = if self.on {
            ("──●", Color::Green)
        } else {
            ("●──", Color::DarkGray)
        };
        let label_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let line = Line::from(vec![
            Span::styled(track, Style::default().fg(track_color)),
            Span::raw(" "),
            Span::styled(self.label, label_style),
            Span::styled(
                if self.on { " (on)" } else { " (off)" },
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
