//! Checkbox widget: a `[x]` marker with a label

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Checkbox<'a> {
    label: &'a str,
    checked: bool,
    focused: bool,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str, checked: bool) -> Self {
        Self {
            label,
            checked,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 1 {
            return;
        }

        let marker = if self.checked { "[x]" } else { "[ ]" };
        let marker_color = if self.checked {
            Color::Green
        } else {
            Color::DarkGray
        };
        let label_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(marker_color)),
            Span::raw(" "),
            Span::styled(self.label, label_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
