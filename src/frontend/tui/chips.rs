//! Chip widgets: assist chip and filter chip, rendered inline
//!
//! The assist chip reports activation like a button; the filter chip shows
//! its selected state from the snapshot.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct AssistChip<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> AssistChip<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn as_span(&self) -> Span<'static> {
        let mut style = Style::default().fg(Color::Cyan);
        if self.focused {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        Span::styled(format!("( ★ {} )", self.label), style)
    }
}

pub struct FilterChip<'a> {
    label: &'a str,
    selected: bool,
    focused: bool,
}

impl<'a> FilterChip<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            selected,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn as_span(&self) -> Span<'static> {
        let text = if self.selected {
            format!("[ ✓ {} ]", self.label)
        } else {
            format!("[ {} ]", self.label)
        };
        let mut style = if self.selected {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        if self.focused {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        Span::styled(text, style)
    }
}

/// Both chips side by side on one row
pub struct ChipRow<'a> {
    assist: AssistChip<'a>,
    filter: FilterChip<'a>,
}

impl<'a> ChipRow<'a> {
    pub fn new(assist: AssistChip<'a>, filter: FilterChip<'a>) -> Self {
        Self { assist, filter }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 5 || area.height < 1 {
            return;
        }

        let line = Line::from(vec![self.assist.as_span(), Span::raw(" "), self.filter.as_span()]);
        Paragraph::new(line).render(area, buf);
    }
}
