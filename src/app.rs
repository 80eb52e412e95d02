//! Application state and event handling for the showcase
//!
//! Owns the controller handle plus view-local UI state, translates routed
//! control actions into controller operations, and tracks when the screen
//! needs a redraw. The controller is constructor-injected from the
//! composition root; this module never reaches for ambient state.

use crate::config::Config;
use crate::core::input_router::route_input;
use crate::core::{ControlAction, ShowcaseController, Subscription};
use crate::data::{FocusedControl, UiState, RADIO_OPTIONS};
use crate::frontend::tui::slider::Slider;
use crate::frontend::FrontendEvent;
use std::cell::Cell;
use std::rc::Rc;

pub struct ShowcaseApp {
    controller: Rc<ShowcaseController>,
    ui: UiState,
    running: bool,
    slider_step: f32,
    needs_redraw: Rc<Cell<bool>>,
    // Held for its Drop side effect: unsubscribes when the app goes away
    _state_subscription: Subscription,
}

impl ShowcaseApp {
    pub fn new(controller: Rc<ShowcaseController>, config: &Config) -> Self {
        let needs_redraw = Rc::new(Cell::new(true));

        // Any published snapshot marks the screen dirty
        let redraw = Rc::clone(&needs_redraw);
        let subscription = controller.subscribe(move || redraw.set(true));

        Self {
            controller,
            ui: UiState::new(),
            running: true,
            slider_step: config.ui.slider_step,
            needs_redraw,
            _state_subscription: subscription,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// True once since the last snapshot publish or view-local change
    pub fn take_redraw(&mut self) -> bool {
        let dirty = self.needs_redraw.get();
        self.needs_redraw.set(false);
        dirty
    }

    pub fn handle_event(&mut self, event: FrontendEvent) {
        match event {
            FrontendEvent::Key { code, modifiers } => {
                let action = route_input(code, modifiers, self.ui.focus);
                self.apply_action(action);
            }
            FrontendEvent::Resize { .. } => self.needs_redraw.set(true),
            FrontendEvent::Quit => self.running = false,
        }
    }

    fn apply_action(&mut self, action: ControlAction) {
        match action {
            ControlAction::Quit => {
                self.running = false;
            }
            ControlAction::FocusNext => {
                self.set_focus(self.ui.focus.next());
            }
            ControlAction::FocusPrev => {
                self.set_focus(self.ui.focus.prev());
            }
            ControlAction::Activate => self.activate_focused(),
            ControlAction::InsertChar(c) => self.edit_text(|value, cursor| {
                let (next, cursor) = insert_char(value, cursor, c);
                (Some(next), cursor)
            }),
            ControlAction::DeleteBack => self.edit_text(|value, cursor| {
                let (next, cursor) = delete_back(value, cursor);
                (next, cursor)
            }),
            ControlAction::DeleteForward => {
                self.edit_text(|value, cursor| (delete_forward(value, cursor), cursor))
            }
            ControlAction::CursorLeft => {
                self.move_cursor(|cursor, _len| cursor.saturating_sub(1));
            }
            ControlAction::CursorRight => {
                self.move_cursor(|cursor, len| (cursor + 1).min(len));
            }
            ControlAction::CursorHome => self.move_cursor(|_cursor, _len| 0),
            ControlAction::CursorEnd => self.move_cursor(|_cursor, len| len),
            ControlAction::SelectRadio(index) => {
                self.controller.select_radio_option(index);
            }
            ControlAction::RadioNext => {
                let current = self.current_radio();
                self.controller
                    .select_radio_option((current + 1).min(RADIO_OPTIONS.len() - 1));
            }
            ControlAction::RadioPrev => {
                let current = self.current_radio();
                self.controller.select_radio_option(current.saturating_sub(1));
            }
            ControlAction::SliderIncrease => {
                let value = self.controller.state().slider_value;
                self.controller
                    .set_slider_value(Slider::step_up(value, self.slider_step));
            }
            ControlAction::SliderDecrease => {
                let value = self.controller.state().slider_value;
                self.controller
                    .set_slider_value(Slider::step_down(value, self.slider_step));
            }
            ControlAction::Ignored => {}
        }
    }

    fn activate_focused(&mut self) {
        let state = self.controller.state();
        match self.ui.focus {
            FocusedControl::Checkbox => self.controller.set_checked(!state.is_checked),
            FocusedControl::Switch => self.controller.set_switch_on(!state.is_switch_on),
            FocusedControl::FilterChip => self.controller.toggle_filter_chip(),
            FocusedControl::RadioGroup => {
                // Re-select the current row, clamped into the option set
                self.controller
                    .select_radio_option(self.current_radio());
            }
            focus => {
                if let Some(label) = focus.activation_label() {
                    self.controller.notify_button_activated(label);
                    self.ui.status_text = format!("{} activated", label);
                    self.needs_redraw.set(true);
                }
            }
        }
    }

    /// Selected radio index clamped into the presenting control's range
    fn current_radio(&self) -> usize {
        self.controller
            .state()
            .selected_radio_option
            .min(RADIO_OPTIONS.len() - 1)
    }

    fn set_focus(&mut self, focus: FocusedControl) {
        self.ui.focus = focus;
        self.clamp_cursors();
        self.needs_redraw.set(true);
    }

    /// Keep cursors inside their field contents (in chars)
    fn clamp_cursors(&mut self) {
        let state = self.controller.state();
        self.ui.text_cursor = self.ui.text_cursor.min(state.text_field_value.chars().count());
        self.ui.outlined_cursor = self
            .ui
            .outlined_cursor
            .min(state.outlined_text_field_value.chars().count());
    }

    /// Apply an edit to the focused text field through the controller
    fn edit_text<F>(&mut self, edit: F)
    where
        F: FnOnce(&str, usize) -> (Option<String>, usize),
    {
        let state = self.controller.state();
        match self.ui.focus {
            FocusedControl::TextField => {
                let (next, cursor) = edit(&state.text_field_value, self.ui.text_cursor);
                self.ui.text_cursor = cursor;
                if let Some(next) = next {
                    self.controller.set_text_field_value(next);
                }
            }
            FocusedControl::OutlinedTextField => {
                let (next, cursor) =
                    edit(&state.outlined_text_field_value, self.ui.outlined_cursor);
                self.ui.outlined_cursor = cursor;
                if let Some(next) = next {
                    self.controller.set_outlined_text_field_value(next);
                }
            }
            _ => {}
        }
    }

    fn move_cursor<F>(&mut self, movement: F)
    where
        F: FnOnce(usize, usize) -> usize,
    {
        let state = self.controller.state();
        match self.ui.focus {
            FocusedControl::TextField => {
                let len = state.text_field_value.chars().count();
                self.ui.text_cursor = movement(self.ui.text_cursor, len);
            }
            FocusedControl::OutlinedTextField => {
                let len = state.outlined_text_field_value.chars().count();
                self.ui.outlined_cursor = movement(self.ui.outlined_cursor, len);
            }
            _ => return,
        }
        self.needs_redraw.set(true);
    }
}

/// Insert a char at a char-indexed cursor, returning the new string and cursor
fn insert_char(value: &str, cursor: usize, c: char) -> (String, usize) {
    let byte_idx = char_to_byte_index(value, cursor);
    let mut next = value.to_string();
    next.insert(byte_idx, c);
    (next, cursor + 1)
}

/// Delete the char before the cursor; None when there is nothing to delete
fn delete_back(value: &str, cursor: usize) -> (Option<String>, usize) {
    if cursor == 0 {
        return (None, 0);
    }
    let start = char_to_byte_index(value, cursor - 1);
    let end = char_to_byte_index(value, cursor);
    let mut next = value.to_string();
    next.replace_range(start..end, "");
    (Some(next), cursor - 1)
}

/// Delete the char under the cursor; None when the cursor is at the end
fn delete_forward(value: &str, cursor: usize) -> Option<String> {
    if cursor >= value.chars().count() {
        return None;
    }
    let start = char_to_byte_index(value, cursor);
    let end = char_to_byte_index(value, cursor + 1);
    let mut next = value.to_string();
    next.replace_range(start..end, "");
    Some(next)
}

fn char_to_byte_index(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> ShowcaseApp {
        let controller = Rc::new(ShowcaseController::new());
        ShowcaseApp::new(controller, &Config::default())
    }

    fn key(app: &mut ShowcaseApp, code: KeyCode) {
        app.handle_event(FrontendEvent::key(code, KeyModifiers::NONE));
    }

    fn focus(app: &mut ShowcaseApp, target: FocusedControl) {
        while app.ui.focus != target {
            key(app, KeyCode::Tab);
        }
    }

    #[test]
    fn test_typing_updates_controller_state() {
        let mut app = app();
        key(&mut app, KeyCode::Char('h'));
        key(&mut app, KeyCode::Char('i'));
        assert_eq!(app.controller.state().text_field_value, "hi");
        assert_eq!(app.ui.text_cursor, 2);
    }

    #[test]
    fn test_backspace_removes_before_cursor() {
        let mut app = app();
        key(&mut app, KeyCode::Char('h'));
        key(&mut app, KeyCode::Char('i'));
        key(&mut app, KeyCode::Left);
        key(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller.state().text_field_value, "i");
        assert_eq!(app.ui.text_cursor, 0);
    }

    #[test]
    fn test_backspace_at_start_is_a_noop() {
        let mut app = app();
        key(&mut app, KeyCode::Backspace);
        assert_eq!(app.controller.state().text_field_value, "");
    }

    #[test]
    fn test_outlined_field_edits_independently() {
        let mut app = app();
        key(&mut app, KeyCode::Char('a'));
        focus(&mut app, FocusedControl::OutlinedTextField);
        key(&mut app, KeyCode::Char('b'));

        let state = app.controller.state();
        assert_eq!(state.text_field_value, "a");
        assert_eq!(state.outlined_text_field_value, "b");
    }

    #[test]
    fn test_space_toggles_checkbox() {
        let mut app = app();
        focus(&mut app, FocusedControl::Checkbox);
        key(&mut app, KeyCode::Char(' '));
        assert!(app.controller.state().is_checked);
        key(&mut app, KeyCode::Char(' '));
        assert!(!app.controller.state().is_checked);
    }

    #[test]
    fn test_enter_toggles_switch() {
        let mut app = app();
        focus(&mut app, FocusedControl::Switch);
        key(&mut app, KeyCode::Enter);
        assert!(app.controller.state().is_switch_on);
    }

    #[test]
    fn test_radio_selection_moves_and_clamps() {
        let mut app = app();
        focus(&mut app, FocusedControl::RadioGroup);
        key(&mut app, KeyCode::Down);
        assert_eq!(app.controller.state().selected_radio_option, 1);
        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Down);
        // Clamped at the last option
        assert_eq!(app.controller.state().selected_radio_option, 2);
        key(&mut app, KeyCode::Char('1'));
        assert_eq!(app.controller.state().selected_radio_option, 0);
        key(&mut app, KeyCode::Up);
        assert_eq!(app.controller.state().selected_radio_option, 0);
    }

    #[test]
    fn test_slider_steps_and_clamps() {
        let mut app = app();
        focus(&mut app, FocusedControl::Slider);
        key(&mut app, KeyCode::Right);
        assert!((app.controller.state().slider_value - 0.55).abs() < 1e-6);

        for _ in 0..20 {
            key(&mut app, KeyCode::Right);
        }
        assert_eq!(app.controller.state().slider_value, 1.0);

        for _ in 0..40 {
            key(&mut app, KeyCode::Left);
        }
        assert_eq!(app.controller.state().slider_value, 0.0);
    }

    #[test]
    fn test_button_activation_reports_without_state_change() {
        let mut app = app();
        focus(&mut app, FocusedControl::FilledButton);
        let before = app.controller.state();
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.state(), before);
        assert_eq!(app.ui.status_text, "Button activated");
    }

    #[test]
    fn test_filter_chip_toggles_through_activation() {
        let mut app = app();
        focus(&mut app, FocusedControl::FilterChip);
        key(&mut app, KeyCode::Char(' '));
        assert!(app.controller.state().is_filter_chip_selected);
        key(&mut app, KeyCode::Char(' '));
        assert!(!app.controller.state().is_filter_chip_selected);
    }

    #[test]
    fn test_escape_stops_the_app() {
        let mut app = app();
        assert!(app.is_running());
        key(&mut app, KeyCode::Esc);
        assert!(!app.is_running());
    }

    #[test]
    fn test_update_marks_screen_dirty() {
        let mut app = app();
        assert!(app.take_redraw()); // initial frame
        assert!(!app.take_redraw());
        key(&mut app, KeyCode::Char('x'));
        assert!(app.take_redraw());
    }

    #[test]
    fn test_insert_char_multibyte() {
        let (next, cursor) = insert_char("héllo", 2, 'x');
        assert_eq!(next, "héxllo");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_delete_forward_at_end_is_a_noop() {
        assert_eq!(delete_forward("ab", 2), None);
        assert_eq!(delete_forward("ab", 1), Some("a".to_string()));
    }
}
