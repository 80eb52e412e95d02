//! Radio group widget: one `(•)` row per option
//!
//! The selected index comes straight from the snapshot. An out-of-range
//! index marks no row; the group never rewrites the stored value.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct RadioGroup<'a> {
    options: &'a [&'a str],
    selected: usize,
    focused: bool,
}

impl<'a> RadioGroup<'a> {
    pub fn new(options: &'a [&'a str], selected: usize) -> Self {
        Self {
            options,
            selected,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 5 || area.height < 1 {
            return;
        }

        for (index, label) in self.options.iter().enumerate() {
            if index as u16 >= area.height {
                break;
            }
            let row = Rect::new(area.x, area.y + index as u16, area.width, 1);

            let selected = index == self.selected;
            let marker = if selected { "(•)" } else { "( )" };
            let marker_color = if selected {
                Color::Green
            } else {
                Color::DarkGray
            };
            let label_style = if self.focused && selected {
                Style::default().fg(Color::Yellow)
            } else if self.focused {
                Style::default()
            } else {
                Style::default().fg(Color::Gray)
            };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(marker_color)),
                Span::raw(" "),
                Span::styled(*label, label_style),
            ]);
            Paragraph::new(line).render(row, buf);
        }
    }
}
