//! View-local UI state - focus, text cursors, status line
//!
//! Everything here belongs to the presentation layer. Control values live in
//! `ShowcaseState` and are only ever written through the controller.

/// Focusable controls, in screen order (top to bottom, left column first)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusedControl {
    TextField,
    OutlinedTextField,
    FilledButton,
    OutlinedButton,
    TextButton,
    IconButton,
    Fab,
    Card,
    AssistChip,
    FilterChip,
    Checkbox,
    Switch,
    RadioGroup,
    Slider,
}

impl FocusedControl {
    /// The focus ring, in traversal order
    pub const ORDER: [FocusedControl; 14] = [
        FocusedControl::TextField,
        FocusedControl::OutlinedTextField,
        FocusedControl::FilledButton,
        FocusedControl::OutlinedButton,
        FocusedControl::TextButton,
        FocusedControl::IconButton,
        FocusedControl::Fab,
        FocusedControl::Card,
        FocusedControl::AssistChip,
        FocusedControl::FilterChip,
        FocusedControl::Checkbox,
        FocusedControl::Switch,
        FocusedControl::RadioGroup,
        FocusedControl::Slider,
    ];

    /// Next control in the ring, wrapping at the end
    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|c| *c == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    /// Previous control in the ring, wrapping at the start
    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|c| *c == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether typed characters should edit this control
    pub fn is_text_field(self) -> bool {
        matches!(
            self,
            FocusedControl::TextField | FocusedControl::OutlinedTextField
        )
    }

    /// Label reported through `notify_button_activated`, for controls that
    /// report activation rather than holding state
    pub fn activation_label(self) -> Option<&'static str> {
        let label = match self {
            FocusedControl::FilledButton => "Button",
            FocusedControl::OutlinedButton => "OutlinedButton",
            FocusedControl::TextButton => "TextButton",
            FocusedControl::IconButton => "IconButton",
            FocusedControl::Fab => "FloatingActionButton",
            FocusedControl::Card => "Card",
            FocusedControl::AssistChip => "AssistChip",
            _ => return None,
        };
        Some(label)
    }
}

/// Per-frame view state not owned by the controller
#[derive(Clone, Debug)]
pub struct UiState {
    /// Currently focused control
    pub focus: FocusedControl,

    /// Cursor position (in chars) inside the filled text field
    pub text_cursor: usize,

    /// Cursor position (in chars) inside the outlined text field
    pub outlined_cursor: usize,

    /// Status bar text (last reported activation)
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: FocusedControl::TextField,
            text_cursor: 0,
            outlined_cursor: 0,
            status_text: String::new(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_ring_wraps_forward() {
        let mut focus = FocusedControl::TextField;
        for _ in 0..FocusedControl::ORDER.len() {
            focus = focus.next();
        }
        assert_eq!(focus, FocusedControl::TextField);
    }

    #[test]
    fn test_focus_ring_wraps_backward() {
        assert_eq!(FocusedControl::TextField.prev(), FocusedControl::Slider);
        assert_eq!(FocusedControl::Slider.next(), FocusedControl::TextField);
    }

    #[test]
    fn test_focus_ring_visits_every_control() {
        let mut focus = FocusedControl::TextField;
        let mut seen = Vec::new();
        for _ in 0..FocusedControl::ORDER.len() {
            seen.push(focus);
            focus = focus.next();
        }
        for control in FocusedControl::ORDER {
            assert!(seen.contains(&control), "{:?} missing from ring", control);
        }
    }

    #[test]
    fn test_activation_labels() {
        assert_eq!(
            FocusedControl::FilledButton.activation_label(),
            Some("Button")
        );
        assert_eq!(
            FocusedControl::Fab.activation_label(),
            Some("FloatingActionButton")
        );
        assert_eq!(FocusedControl::Checkbox.activation_label(), None);
        assert_eq!(FocusedControl::Slider.activation_label(), None);
    }
}
