//! Keyboard routing for the showcase screen
//!
//! Resolves a key event against the currently focused control. Global keys
//! (Tab/BackTab, Esc, Ctrl+C) win over per-control handling; text editing
//! keys only apply while a text field has focus.

use crate::core::actions::ControlAction;
use crate::data::ui_state::FocusedControl;
use crossterm::event::{KeyCode, KeyModifiers};

/// Route a key event to a ControlAction based on the current focus
pub fn route_input(code: KeyCode, modifiers: KeyModifiers, focus: FocusedControl) -> ControlAction {
    // Ctrl+C quits regardless of focus
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return ControlAction::Quit;
    }

    match code {
        KeyCode::Esc => ControlAction::Quit,
        KeyCode::Tab => ControlAction::FocusNext,
        KeyCode::BackTab => ControlAction::FocusPrev,
        _ => route_for_control(code, modifiers, focus),
    }
}

fn route_for_control(
    code: KeyCode,
    modifiers: KeyModifiers,
    focus: FocusedControl,
) -> ControlAction {
    if focus.is_text_field() {
        return route_text_field(code, modifiers);
    }

    match (focus, code) {
        (FocusedControl::RadioGroup, KeyCode::Up) => ControlAction::RadioPrev,
        (FocusedControl::RadioGroup, KeyCode::Down) => ControlAction::RadioNext,
        (FocusedControl::RadioGroup, KeyCode::Char(c @ '1'..='3')) => {
            ControlAction::SelectRadio(c as usize - '1' as usize)
        }
        (FocusedControl::Slider, KeyCode::Left) => ControlAction::SliderDecrease,
        (FocusedControl::Slider, KeyCode::Right) => ControlAction::SliderIncrease,
        (_, KeyCode::Enter | KeyCode::Char(' ')) => ControlAction::Activate,
        // Outside text fields the arrow keys also walk the focus ring
        (_, KeyCode::Up | KeyCode::Left) => ControlAction::FocusPrev,
        (_, KeyCode::Down | KeyCode::Right) => ControlAction::FocusNext,
        _ => ControlAction::Ignored,
    }
}

fn route_text_field(code: KeyCode, modifiers: KeyModifiers) -> ControlAction {
    match code {
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
            ControlAction::InsertChar(c)
        }
        KeyCode::Backspace => ControlAction::DeleteBack,
        KeyCode::Delete => ControlAction::DeleteForward,
        KeyCode::Left => ControlAction::CursorLeft,
        KeyCode::Right => ControlAction::CursorRight,
        KeyCode::Home => ControlAction::CursorHome,
        KeyCode::End => ControlAction::CursorEnd,
        // Enter advances like tabbing through a form
        KeyCode::Enter | KeyCode::Down => ControlAction::FocusNext,
        KeyCode::Up => ControlAction::FocusPrev,
        _ => ControlAction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_moves_focus_everywhere() {
        for focus in FocusedControl::ORDER {
            assert_eq!(
                route_input(KeyCode::Tab, KeyModifiers::NONE, focus),
                ControlAction::FocusNext
            );
            assert_eq!(
                route_input(KeyCode::BackTab, KeyModifiers::SHIFT, focus),
                ControlAction::FocusPrev
            );
        }
    }

    #[test]
    fn test_ctrl_c_quits_inside_text_field() {
        assert_eq!(
            route_input(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                FocusedControl::TextField
            ),
            ControlAction::Quit
        );
    }

    #[test]
    fn test_chars_edit_the_focused_text_field() {
        assert_eq!(
            route_input(
                KeyCode::Char('a'),
                KeyModifiers::NONE,
                FocusedControl::OutlinedTextField
            ),
            ControlAction::InsertChar('a')
        );
        // Space is text inside a field, not an activation
        assert_eq!(
            route_input(
                KeyCode::Char(' '),
                KeyModifiers::NONE,
                FocusedControl::TextField
            ),
            ControlAction::InsertChar(' ')
        );
    }

    #[test]
    fn test_chars_ignored_outside_text_fields() {
        assert_eq!(
            route_input(
                KeyCode::Char('a'),
                KeyModifiers::NONE,
                FocusedControl::Checkbox
            ),
            ControlAction::Ignored
        );
    }

    #[test]
    fn test_space_and_enter_activate_toggles() {
        assert_eq!(
            route_input(
                KeyCode::Char(' '),
                KeyModifiers::NONE,
                FocusedControl::Checkbox
            ),
            ControlAction::Activate
        );
        assert_eq!(
            route_input(KeyCode::Enter, KeyModifiers::NONE, FocusedControl::Switch),
            ControlAction::Activate
        );
    }

    #[test]
    fn test_radio_group_keys() {
        assert_eq!(
            route_input(KeyCode::Down, KeyModifiers::NONE, FocusedControl::RadioGroup),
            ControlAction::RadioNext
        );
        assert_eq!(
            route_input(KeyCode::Up, KeyModifiers::NONE, FocusedControl::RadioGroup),
            ControlAction::RadioPrev
        );
        assert_eq!(
            route_input(
                KeyCode::Char('2'),
                KeyModifiers::NONE,
                FocusedControl::RadioGroup
            ),
            ControlAction::SelectRadio(1)
        );
    }

    #[test]
    fn test_slider_keys() {
        assert_eq!(
            route_input(KeyCode::Left, KeyModifiers::NONE, FocusedControl::Slider),
            ControlAction::SliderDecrease
        );
        assert_eq!(
            route_input(KeyCode::Right, KeyModifiers::NONE, FocusedControl::Slider),
            ControlAction::SliderIncrease
        );
    }

    #[test]
    fn test_enter_in_text_field_advances_focus() {
        assert_eq!(
            route_input(KeyCode::Enter, KeyModifiers::NONE, FocusedControl::TextField),
            ControlAction::FocusNext
        );
    }
}
