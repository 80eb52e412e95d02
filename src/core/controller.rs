//! Showcase controller - sole mutator and publisher of control state
//!
//! One operation per interactive control. Each operation derives a new
//! snapshot through `ShowcaseState::apply` and publishes it; subscribers are
//! notified before the call returns. Every operation also emits one
//! diagnostic line naming the control and the new value.
//!
//! There are no failure paths: inputs are accepted as given. This holds UI
//! state, it does not validate a domain model. In particular the radio
//! index and slider value are stored unchecked; range enforcement is the
//! presenting control's job.

use crate::core::observable::{Observable, Subscription};
use crate::data::{ShowcaseState, StateChange};

pub struct ShowcaseController {
    state: Observable<ShowcaseState>,
}

impl ShowcaseController {
    /// Create a controller holding the default snapshot
    pub fn new() -> Self {
        Self {
            state: Observable::new(ShowcaseState::default()),
        }
    }

    /// Latest published snapshot
    pub fn state(&self) -> ShowcaseState {
        self.state.get()
    }

    /// Register an observer, called synchronously after every update
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> Subscription {
        self.state.subscribe(callback)
    }

    fn update(&self, change: StateChange) {
        self.state.set(self.state.get().apply(change));
    }

    pub fn set_text_field_value(&self, value: String) {
        tracing::debug!("TextField: value changed to {:?}", value);
        self.update(StateChange::TextFieldValue(value));
    }

    pub fn set_outlined_text_field_value(&self, value: String) {
        tracing::debug!("OutlinedTextField: value changed to {:?}", value);
        self.update(StateChange::OutlinedTextFieldValue(value));
    }

    pub fn set_checked(&self, checked: bool) {
        tracing::debug!(
            "Checkbox: {}",
            if checked { "checked" } else { "unchecked" }
        );
        self.update(StateChange::Checked(checked));
    }

    pub fn set_switch_on(&self, on: bool) {
        tracing::debug!("Switch: {}", if on { "on" } else { "off" });
        self.update(StateChange::SwitchOn(on));
    }

    pub fn select_radio_option(&self, index: usize) {
        tracing::debug!("RadioButton: selected option {}", index);
        self.update(StateChange::RadioOption(index));
    }

    pub fn set_slider_value(&self, value: f32) {
        tracing::debug!("Slider: value changed to {:.2}", value);
        self.update(StateChange::SliderValue(value));
    }

    pub fn toggle_filter_chip(&self) {
        self.update(StateChange::ToggleFilterChip);
        let selected = self.state.get().is_filter_chip_selected;
        tracing::debug!(
            "FilterChip: {}",
            if selected { "selected" } else { "deselected" }
        );
    }

    /// Pure notification: records which button fired without touching state
    pub fn notify_button_activated(&self, label: &str) {
        tracing::debug!("{}: activated", label);
    }
}

impl Default for ShowcaseController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state_has_default_values() {
        let controller = ShowcaseController::new();
        let state = controller.state();
        assert_eq!(state.text_field_value, "");
        assert_eq!(state.outlined_text_field_value, "");
        assert!(!state.is_checked);
        assert!(!state.is_switch_on);
        assert_eq!(state.selected_radio_option, 0);
        assert_eq!(state.slider_value, 0.5);
        assert!(!state.is_filter_chip_selected);
    }

    #[test]
    fn test_set_text_field_value() {
        let controller = ShowcaseController::new();
        controller.set_text_field_value("hello".to_string());
        assert_eq!(controller.state().text_field_value, "hello");
    }

    #[test]
    fn test_set_text_field_value_back_to_empty() {
        let controller = ShowcaseController::new();
        controller.set_text_field_value("hello".to_string());
        controller.set_text_field_value(String::new());
        assert_eq!(controller.state().text_field_value, "");
    }

    #[test]
    fn test_set_outlined_text_field_value() {
        let controller = ShowcaseController::new();
        controller.set_outlined_text_field_value("world".to_string());
        assert_eq!(controller.state().outlined_text_field_value, "world");
        // The filled text field is untouched
        assert_eq!(controller.state().text_field_value, "");
    }

    #[test]
    fn test_set_checked() {
        let controller = ShowcaseController::new();
        controller.set_checked(true);
        assert!(controller.state().is_checked);
        controller.set_checked(false);
        assert!(!controller.state().is_checked);
    }

    #[test]
    fn test_set_switch_on() {
        let controller = ShowcaseController::new();
        controller.set_switch_on(true);
        assert!(controller.state().is_switch_on);
        controller.set_switch_on(false);
        assert!(!controller.state().is_switch_on);
    }

    #[test]
    fn test_select_radio_option_every_valid_index() {
        let controller = ShowcaseController::new();
        for index in 0..3 {
            controller.select_radio_option(index);
            assert_eq!(controller.state().selected_radio_option, index);
        }
    }

    #[test]
    fn test_select_radio_option_switches_back() {
        let controller = ShowcaseController::new();
        controller.select_radio_option(2);
        assert_eq!(controller.state().selected_radio_option, 2);
        controller.select_radio_option(0);
        assert_eq!(controller.state().selected_radio_option, 0);
    }

    #[test]
    fn test_select_radio_option_out_of_range_stored_as_is() {
        let controller = ShowcaseController::new();
        controller.select_radio_option(7);
        assert_eq!(controller.state().selected_radio_option, 7);
    }

    #[test]
    fn test_set_slider_value() {
        let controller = ShowcaseController::new();
        controller.set_slider_value(0.75);
        assert_eq!(controller.state().slider_value, 0.75);
    }

    #[test]
    fn test_set_slider_value_boundaries() {
        let controller = ShowcaseController::new();
        controller.set_slider_value(0.0);
        assert_eq!(controller.state().slider_value, 0.0);
        controller.set_slider_value(1.0);
        assert_eq!(controller.state().slider_value, 1.0);
    }

    #[test]
    fn test_toggle_filter_chip() {
        let controller = ShowcaseController::new();
        assert!(!controller.state().is_filter_chip_selected);
        controller.toggle_filter_chip();
        assert!(controller.state().is_filter_chip_selected);
        controller.toggle_filter_chip();
        assert!(!controller.state().is_filter_chip_selected);
    }

    #[test]
    fn test_notify_button_activated_leaves_state_unchanged() {
        let controller = ShowcaseController::new();
        controller.set_text_field_value("text".to_string());
        let before = controller.state();
        controller.notify_button_activated("Button");
        assert_eq!(controller.state(), before);
    }

    #[test]
    fn test_independent_updates() {
        let controller = ShowcaseController::new();
        controller.set_text_field_value("text".to_string());
        controller.set_checked(true);
        controller.set_slider_value(0.8);

        let state = controller.state();
        assert_eq!(state.text_field_value, "text");
        assert!(state.is_checked);
        assert_eq!(state.slider_value, 0.8);
        // Untouched fields keep their defaults
        assert_eq!(state.outlined_text_field_value, "");
        assert!(!state.is_switch_on);
        assert_eq!(state.selected_radio_option, 0);
        assert!(!state.is_filter_chip_selected);
    }

    #[test]
    fn test_subscriber_notified_once_per_update() {
        let controller = ShowcaseController::new();
        let count = Rc::new(Cell::new(0u32));

        let counter = Rc::clone(&count);
        let _sub = controller.subscribe(move || counter.set(counter.get() + 1));

        controller.set_checked(true);
        controller.set_switch_on(true);
        controller.toggle_filter_chip();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_notify_button_activated_does_not_publish() {
        let controller = ShowcaseController::new();
        let count = Rc::new(Cell::new(0u32));

        let counter = Rc::clone(&count);
        let _sub = controller.subscribe(move || counter.set(counter.get() + 1));

        controller.notify_button_activated("Button");
        assert_eq!(count.get(), 0);
    }
}
