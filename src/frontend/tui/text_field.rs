//! Single-line text field widgets
//!
//! Two presentations of the same control: a filled field rendered as a
//! single underlined row, and an outlined field rendered inside a rounded
//! border. Both show a block cursor while focused. The field never owns its
//! contents; value and cursor come in per frame.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct TextField<'a> {
    label: &'a str,
    value: &'a str,
    cursor: usize,
    outlined: bool,
    focused: bool,
}

impl<'a> TextField<'a> {
    pub fn filled(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            cursor: 0,
            outlined: false,
            focused: false,
        }
    }

    pub fn outlined(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            cursor: 0,
            outlined: true,
            focused: false,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Rows this widget needs: one for filled, three for outlined
    pub fn height(outlined: bool) -> u16 {
        if outlined {
            3
        } else {
            1
        }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let inner = if self.outlined {
            let border_color = if self.focused {
                Color::Yellow
            } else {
                Color::DarkGray
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .title(self.label);
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        if !self.outlined {
            let label_color = if self.focused {
                Color::Yellow
            } else {
                Color::DarkGray
            };
            spans.push(Span::styled(
                format!("{}: ", self.label),
                Style::default().fg(label_color),
            ));
        }
        self.push_value_spans(&mut spans);

        let mut paragraph = Paragraph::new(Line::from(spans));
        if !self.outlined {
            paragraph = paragraph.style(Style::default().add_modifier(Modifier::UNDERLINED));
        }
        paragraph.render(inner, buf);
    }

    /// Build the value with a block cursor at the cursor position
    fn push_value_spans(&self, spans: &mut Vec<Span<'a>>) {
        if !self.focused {
            spans.push(Span::raw(self.value));
            return;
        }

        let chars: Vec<char> = self.value.chars().collect();
        let cursor = self.cursor.min(chars.len());

        let before: String = chars[..cursor].iter().collect();
        let under: String = chars
            .get(cursor)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = if cursor < chars.len() {
            chars[cursor + 1..].iter().collect()
        } else {
            String::new()
        };

        spans.push(Span::raw(before));
        spans.push(Span::styled(
            under,
            Style::default().fg(Color::Black).bg(Color::White),
        ));
        spans.push(Span::raw(after));
    }
}
