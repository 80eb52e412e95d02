//! Horizontal slider widget
//!
//! Renders a track with a knob at the current position. The widget is the
//! range boundary for the slider: callers step the value through
//! [`Slider::step_up`] / [`Slider::step_down`], which clamp to [0.0, 1.0];
//! the stored value itself is displayed as given.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
};

pub struct Slider {
    value: f32,
    focused: bool,
}

impl Slider {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// New value after one increment, clamped to the control's range
    pub fn step_up(value: f32, step: f32) -> f32 {
        (value + step).clamp(0.0, 1.0)
    }

    /// New value after one decrement, clamped to the control's range
    pub fn step_down(value: f32, step: f32) -> f32 {
        (value - step).clamp(0.0, 1.0)
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 5 || area.height < 1 {
            return;
        }

        let track_width = area.width;
        let ratio = self.value.clamp(0.0, 1.0);
        let knob = ((track_width.saturating_sub(1)) as f32 * ratio).round() as u16;

        let fill_color = if self.focused {
            Color::Yellow
        } else {
            Color::Cyan
        };

        let y = area.y;
        if y >= buf.area().height {
            return;
        }
        for i in 0..track_width {
            let x = area.x + i;
            if x >= buf.area().width {
                break;
            }
            if i == knob {
                buf[(x, y)].set_char('●');
                buf[(x, y)].set_fg(fill_color);
            } else {
                buf[(x, y)].set_char('─');
                buf[(x, y)].set_fg(if i < knob { fill_color } else { Color::DarkGray });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_clamps_to_range() {
        assert_eq!(Slider::step_up(0.98, 0.05), 1.0);
        assert_eq!(Slider::step_down(0.02, 0.05), 0.0);
    }

    #[test]
    fn test_step_moves_by_step() {
        assert!((Slider::step_up(0.5, 0.05) - 0.55).abs() < 1e-6);
        assert!((Slider::step_down(0.5, 0.05) - 0.45).abs() < 1e-6);
    }
}
