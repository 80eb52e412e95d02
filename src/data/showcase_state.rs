//! Showcase control state - the single snapshot every widget renders from
//!
//! Pure data with no rendering or input handling. The controller derives a
//! complete new snapshot for every update; nothing mutates a snapshot after
//! creation.

/// Labels for the fixed radio option set
pub const RADIO_OPTIONS: [&str; 3] = ["Option A", "Option B", "Option C"];

/// Immutable snapshot of all interactive control values
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseState {
    /// Filled text field contents
    pub text_field_value: String,

    /// Outlined text field contents
    pub outlined_text_field_value: String,

    /// Checkbox state
    pub is_checked: bool,

    /// Switch state
    pub is_switch_on: bool,

    /// Index into `RADIO_OPTIONS`. Stored as given; the radio group simply
    /// marks no row for an out-of-range index.
    pub selected_radio_option: usize,

    /// Slider position. The slider widget keeps its own input inside
    /// [0.0, 1.0]; the value itself is stored as given.
    pub slider_value: f32,

    /// Filter chip state
    pub is_filter_chip_selected: bool,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            text_field_value: String::new(),
            outlined_text_field_value: String::new(),
            is_checked: false,
            is_switch_on: false,
            selected_radio_option: 0,
            slider_value: 0.5,
            is_filter_chip_selected: false,
        }
    }
}

/// Field-level delta applied to a snapshot
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    TextFieldValue(String),
    OutlinedTextFieldValue(String),
    Checked(bool),
    SwitchOn(bool),
    RadioOption(usize),
    SliderValue(f32),
    ToggleFilterChip,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a new snapshot with exactly the targeted field changed
    pub fn apply(&self, change: StateChange) -> Self {
        let mut next = self.clone();
        match change {
            StateChange::TextFieldValue(value) => next.text_field_value = value,
            StateChange::OutlinedTextFieldValue(value) => {
                next.outlined_text_field_value = value;
            }
            StateChange::Checked(checked) => next.is_checked = checked,
            StateChange::SwitchOn(on) => next.is_switch_on = on,
            StateChange::RadioOption(index) => next.selected_radio_option = index,
            StateChange::SliderValue(value) => next.slider_value = value,
            StateChange::ToggleFilterChip => {
                next.is_filter_chip_selected = !next.is_filter_chip_selected;
            }
        }
        next
    }
}
