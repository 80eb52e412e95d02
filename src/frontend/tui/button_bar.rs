//! Button widgets rendered inline in a row
//!
//! Each visual kind gets its own treatment: filled buttons draw a solid
//! background, outlined buttons draw brackets, text buttons are bare, the
//! icon button and FAB are compact glyphs. Activation is reported by the
//! app through `notify_button_activated`; buttons themselves are stateless.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Visual kind of a button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Filled,
    Outlined,
    Text,
    Icon,
    Fab,
}

pub struct Button<'a> {
    label: &'a str,
    kind: ButtonKind,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, kind: ButtonKind) -> Self {
        Self {
            label,
            kind,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn text(&self) -> String {
        match self.kind {
            ButtonKind::Filled | ButtonKind::Outlined => format!("[ {} ]", self.label),
            ButtonKind::Text => format!(" {} ", self.label),
            ButtonKind::Icon => " ♥ ".to_string(),
            ButtonKind::Fab => "(+)".to_string(),
        }
    }

    fn style(&self) -> Style {
        let base = match self.kind {
            ButtonKind::Filled => Style::default().fg(Color::Black).bg(Color::Cyan),
            ButtonKind::Outlined => Style::default().fg(Color::Cyan),
            ButtonKind::Text => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
            ButtonKind::Icon => Style::default().fg(Color::Red),
            ButtonKind::Fab => Style::default().fg(Color::Black).bg(Color::Magenta),
        };
        if self.focused {
            base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            base
        }
    }

    fn as_span(&self) -> Span<'static> {
        Span::styled(self.text(), self.style())
    }
}

/// A row of buttons separated by a single space
pub struct ButtonRow<'a> {
    buttons: Vec<Button<'a>>,
}

impl<'a> ButtonRow<'a> {
    pub fn new(buttons: Vec<Button<'a>>) -> Self {
        Self { buttons }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let mut spans = Vec::new();
        for (i, button) in self.buttons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(button.as_span());
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
