//! What a key press means for the focused control
//!
//! The input router resolves raw key events into these actions; the app
//! applies them by calling controller operations or adjusting view-local
//! state (focus, cursors).

/// Result of routing one key event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    /// Move focus to the next control in the ring
    FocusNext,

    /// Move focus to the previous control in the ring
    FocusPrev,

    /// Activate the focused control (button press, toggle, card tap)
    Activate,

    /// Insert a character into the focused text field
    InsertChar(char),

    /// Delete the character before the cursor
    DeleteBack,

    /// Delete the character under the cursor
    DeleteForward,

    /// Move the text cursor
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    /// Select a radio option directly
    SelectRadio(usize),

    /// Move the radio selection down / up
    RadioNext,
    RadioPrev,

    /// Step the slider
    SliderIncrease,
    SliderDecrease,

    /// Exit the application
    Quit,

    /// Key has no meaning in the current context
    Ignored,
}
