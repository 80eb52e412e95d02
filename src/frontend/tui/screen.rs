//! Showcase screen layout
//!
//! Composes the five sections of the showcase (Text & Input, Buttons,
//! Selection, Indicators & Sliders, Cards & Chips) plus a title bar and a
//! status bar. Every widget is built per frame from the latest published
//! snapshot; this module holds no state of its own.

use crate::data::{FocusedControl, ShowcaseState, UiState, RADIO_OPTIONS};
use crate::frontend::tui::button_bar::{Button, ButtonKind, ButtonRow};
use crate::frontend::tui::checkbox::Checkbox;
use crate::frontend::tui::chips::{AssistChip, ChipRow, FilterChip};
use crate::frontend::tui::progress::{CircularProgress, LinearProgress};
use crate::frontend::tui::radio_group::RadioGroup;
use crate::frontend::tui::slider::Slider;
use crate::frontend::tui::switch::Switch;
use crate::frontend::tui::text_field::TextField;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
    Frame,
};

const TITLE: &str = "Widget Playground";

pub fn render(frame: &mut Frame, state: &ShowcaseState, ui: &UiState, status_bar: bool) {
    let area = frame.area();
    let buf = frame.buffer_mut();

    let [title_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(if status_bar { 1 } else { 0 }),
    ])
    .areas(area);

    render_title(title_area, buf);
    render_body(body_area, buf, state, ui);
    if status_bar {
        render_status(status_area, buf, ui);
    }
}

fn render_title(area: Rect, buf: &mut Buffer) {
    Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .render(area, buf);
}

fn render_body(area: Rect, buf: &mut Buffer, state: &ShowcaseState, ui: &UiState) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let [text_input, buttons, cards] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(4),
        Constraint::Length(5),
    ])
    .areas(left);
    render_text_input_section(text_input, buf, state, ui);
    render_buttons_section(buttons, buf, ui);
    render_cards_section(cards, buf, state, ui);

    let [selection, indicators] =
        Layout::vertical([Constraint::Length(8), Constraint::Length(6)]).areas(right);
    render_selection_section(selection, buf, state, ui);
    render_indicators_section(indicators, buf, state, ui);
}

/// Rounded, titled card framing one showcase section
fn section_block(title: &str, focused: bool) -> Block<'_> {
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
}

fn row(inner: Rect, offset: u16) -> Rect {
    Rect::new(
        inner.x,
        inner.y + offset,
        inner.width,
        inner.height.saturating_sub(offset).min(1),
    )
}

fn render_text_input_section(area: Rect, buf: &mut Buffer, state: &ShowcaseState, ui: &UiState) {
    let block = section_block("Text & Input", false);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }

    Paragraph::new(Span::styled(
        "This is a plain text label",
        Style::default().fg(Color::Gray),
    ))
    .render(row(inner, 0), buf);

    TextField::filled("TextField", &state.text_field_value)
        .cursor(ui.text_cursor)
        .focused(ui.focus == FocusedControl::TextField)
        .render(row(inner, 1), buf);

    let outlined_area = Rect::new(
        inner.x,
        inner.y + 2,
        inner.width,
        TextField::height(true).min(inner.height.saturating_sub(2)),
    );
    TextField::outlined("OutlinedTextField", &state.outlined_text_field_value)
        .cursor(ui.outlined_cursor)
        .focused(ui.focus == FocusedControl::OutlinedTextField)
        .render(outlined_area, buf);
}

fn render_buttons_section(area: Rect, buf: &mut Buffer, ui: &UiState) {
    let block = section_block("Buttons", false);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }

    ButtonRow::new(vec![
        Button::new("Button", ButtonKind::Filled)
            .focused(ui.focus == FocusedControl::FilledButton),
        Button::new("Outlined", ButtonKind::Outlined)
            .focused(ui.focus == FocusedControl::OutlinedButton),
        Button::new("Text", ButtonKind::Text).focused(ui.focus == FocusedControl::TextButton),
    ])
    .render(row(inner, 0), buf);

    ButtonRow::new(vec![
        Button::new("IconButton", ButtonKind::Icon)
            .focused(ui.focus == FocusedControl::IconButton),
        Button::new("FloatingActionButton", ButtonKind::Fab)
            .focused(ui.focus == FocusedControl::Fab),
    ])
    .render(row(inner, 1), buf);
}

fn render_cards_section(area: Rect, buf: &mut Buffer, state: &ShowcaseState, ui: &UiState) {
    // The card itself is a focusable, activatable control
    let block = section_block("Cards & Chips", ui.focus == FocusedControl::Card);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }

    Paragraph::new(Span::styled(
        "This is an activatable card",
        Style::default().fg(Color::Gray),
    ))
    .render(row(inner, 0), buf);

    Paragraph::new(Span::styled(
        "Press Enter while it has focus",
        Style::default().fg(Color::DarkGray),
    ))
    .render(row(inner, 1), buf);

    ChipRow::new(
        AssistChip::new("Assist Chip").focused(ui.focus == FocusedControl::AssistChip),
        FilterChip::new("Filter Chip", state.is_filter_chip_selected)
            .focused(ui.focus == FocusedControl::FilterChip),
    )
    .render(row(inner, 2), buf);
}

fn render_selection_section(area: Rect, buf: &mut Buffer, state: &ShowcaseState, ui: &UiState) {
    let block = section_block("Selection", false);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }

    Checkbox::new("Checkbox", state.is_checked)
        .focused(ui.focus == FocusedControl::Checkbox)
        .render(row(inner, 0), buf);

    Switch::new("Switch", state.is_switch_on)
        .focused(ui.focus == FocusedControl::Switch)
        .render(row(inner, 1), buf);

    Paragraph::new(Span::styled(
        "Radio group",
        Style::default().fg(Color::Gray),
    ))
    .render(row(inner, 2), buf);

    let radio_area = Rect::new(
        inner.x,
        inner.y + 3,
        inner.width,
        (RADIO_OPTIONS.len() as u16).min(inner.height.saturating_sub(3)),
    );
    RadioGroup::new(&RADIO_OPTIONS, state.selected_radio_option)
        .focused(ui.focus == FocusedControl::RadioGroup)
        .render(radio_area, buf);
}

fn render_indicators_section(area: Rect, buf: &mut Buffer, state: &ShowcaseState, ui: &UiState) {
    let block = section_block("Indicators & Sliders", false);
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.height == 0 {
        return;
    }

    Paragraph::new(Line::from(vec![
        Span::styled("Slider: ", Style::default().fg(Color::Gray)),
        Span::raw(format!("{:.2}", state.slider_value)),
    ]))
    .render(row(inner, 0), buf);

    Slider::new(state.slider_value)
        .focused(ui.focus == FocusedControl::Slider)
        .render(row(inner, 1), buf);

    LinearProgress::new(state.slider_value).render(row(inner, 2), buf);

    CircularProgress::new("working...").render(row(inner, 3), buf);
}

fn render_status(area: Rect, buf: &mut Buffer, ui: &UiState) {
    let hints = "Tab focus · Space/Enter activate · ←/→ adjust · Esc quit";
    let status = if ui.status_text.is_empty() {
        hints.to_string()
    } else {
        format!("{}  ·  {}", ui.status_text, hints)
    };

    Paragraph::new(status)
        .style(Style::default().fg(Color::Gray).bg(Color::Black))
        .render(area, buf);
}
