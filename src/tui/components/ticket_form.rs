//! Create-ticket form modal
//!
//! A modal form with title, description, and priority fields. Submission is
//! rejected while title or description trim to empty; on success the new
//! ticket lands at the front of the store, the inputs are cleared, and
//! priority resets to low.

use iocraft::prelude::*;

use crate::store::TicketStore;
use crate::tui::components::footer::{Footer, form_shortcuts};
use crate::tui::components::select::{Select, Selectable, options_for};
use crate::tui::theme::theme;
use crate::tui::validate::TicketFormValidator;
use crate::types::TicketPriority;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Priority,
}

impl FormField {
    /// Get the next field (wrapping)
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Priority,
            FormField::Priority => FormField::Title,
        }
    }

    /// Get the previous field (wrapping)
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Priority,
            FormField::Description => FormField::Title,
            FormField::Priority => FormField::Description,
        }
    }
}

/// Result of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormResult {
    /// User saved a ticket
    Submitted,
    /// User cancelled without saving
    Cancelled,
    /// Still editing
    #[default]
    Editing,
}

/// Props for the TicketForm component
#[derive(Default, Props)]
pub struct TicketFormProps {
    /// The store to create the ticket in
    pub store: Option<State<TicketStore>>,
    /// Callback when the form is closed
    pub on_close: Option<State<FormResult>>,
}

/// Modal create-ticket form
#[component]
pub fn TicketForm<'a>(props: &TicketFormProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    // Form field state
    let mut title = hooks.use_state(String::new);
    let mut description = hooks.use_state(String::new);
    let mut priority = hooks.use_state(|| TicketPriority::Low);

    // UI state
    let mut focused_field = hooks.use_state(FormField::default);
    let mut should_submit = hooks.use_state(|| false);
    let mut should_cancel = hooks.use_state(|| false);
    let mut has_error = hooks.use_state(|| false);
    let mut error_text = hooks.use_state(String::new);

    // Handle submit
    if should_submit.get() {
        should_submit.set(false);

        let title_val = title.to_string();
        let description_val = description.to_string();
        let validation = TicketFormValidator::validate(&title_val, &description_val);

        if !validation.is_valid {
            has_error.set(true);
            error_text.set(validation.error.unwrap_or_default());
        } else if let Some(mut store) = props.store {
            let mut updated = (*store.read()).clone();
            let created = updated
                .create(&title_val, &description_val, priority.get())
                .is_some();
            if created {
                store.set(updated);
                // Reset the inputs after every successful create
                title.set(String::new());
                description.set(String::new());
                priority.set(TicketPriority::Low);
                has_error.set(false);
                error_text.set(String::new());
                if let Some(mut on_close) = props.on_close {
                    on_close.set(FormResult::Submitted);
                }
            } else {
                has_error.set(true);
                error_text.set("Title and description are required".to_string());
            }
        }
    }

    // Handle cancel
    if should_cancel.get() {
        should_cancel.set(false);
        if let Some(mut on_close) = props.on_close {
            on_close.set(FormResult::Cancelled);
        }
    }

    // Keyboard handling
    hooks.use_terminal_events({
        move |event| {
            if let TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = event
            {
                if kind == KeyEventKind::Release {
                    return;
                }

                // Global shortcuts (work in any field)
                if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('s') {
                    should_submit.set(true);
                    return;
                }

                match code {
                    KeyCode::Esc => {
                        should_cancel.set(true);
                        return;
                    }
                    KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
                        focused_field.set(focused_field.get().prev());
                        return;
                    }
                    KeyCode::Tab => {
                        focused_field.set(focused_field.get().next());
                        return;
                    }
                    KeyCode::BackTab => {
                        focused_field.set(focused_field.get().prev());
                        return;
                    }
                    _ => {}
                }

                // Field-specific handling
                match focused_field.get() {
                    FormField::Title => handle_text_input(&mut title, code),
                    FormField::Description => handle_multiline_input(&mut description, code),
                    FormField::Priority => handle_select_input(&mut priority, code),
                }
            }
        }
    });

    let priority_options = options_for::<TicketPriority>();
    let description_text = description.to_string();
    let description_focused = focused_field.get() == FormField::Description;

    element! {
        // Modal backdrop
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: Color::Rgb { r: 80, g: 80, b: 80 },
        ) {
            // Modal content
            View(
                width: 80pct,
                height: 80pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                background_color: theme.background,
            ) {
                // Header
                View(
                    width: 100pct,
                    height: 1,
                    padding_left: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    background_color: theme.border,
                ) {
                    Text(
                        content: "New Ticket",
                        color: theme.text,
                        weight: Weight::Bold,
                    )
                }

                // Error message (if any)
                #(if has_error.get() {
                    Some(element! {
                        View(
                            width: 100pct,
                            padding_left: 1,
                            padding_right: 1,
                            margin_top: 1,
                        ) {
                            Text(
                                content: error_text.to_string(),
                                color: theme.error,
                            )
                        }
                    })
                } else {
                    None
                })

                // Form content
                View(
                    flex_grow: 1.0,
                    width: 100pct,
                    padding: 1,
                    flex_direction: FlexDirection::Column,
                    gap: 1,
                    overflow: Overflow::Hidden,
                ) {
                    // Title field
                    View(flex_direction: FlexDirection::Column) {
                        Text(
                            content: "Title:",
                            color: if focused_field.get() == FormField::Title {
                                theme.border_focused
                            } else {
                                theme.text_dimmed
                            },
                        )
                        View(
                            border_style: BorderStyle::Round,
                            border_color: if focused_field.get() == FormField::Title {
                                theme.border_focused
                            } else {
                                theme.border
                            },
                            padding_left: 1,
                            padding_right: 1,
                            width: 100pct,
                        ) {
                            Text(
                                content: format!("{}_", title.to_string()),
                                color: theme.text,
                            )
                        }
                    }

                    // Description field
                    Text(
                        content: "Description:",
                        color: if description_focused {
                            theme.border_focused
                        } else {
                            theme.text_dimmed
                        },
                    )
                    View(
                        flex_grow: 1.0,
                        width: 100pct,
                        border_style: BorderStyle::Round,
                        border_color: if description_focused {
                            theme.border_focused
                        } else {
                            theme.border
                        },
                        padding: 1,
                        overflow: Overflow::Hidden,
                    ) {
                        View(flex_direction: FlexDirection::Column, height: 100pct) {
                            #({
                                if description_text.is_empty() {
                                    vec![
                                        element! {
                                            Text(content: "_", color: theme.text)
                                        }.into()
                                    ]
                                } else {
                                    let mut elements: Vec<AnyElement<'static>> = Vec::new();
                                    for line in description_text.lines() {
                                        let line_owned = line.to_string();
                                        elements.push(element! {
                                            Text(content: line_owned, color: theme.text)
                                        }.into());
                                    }
                                    if description_focused {
                                        elements.push(element! {
                                            Text(content: "_", color: theme.highlight)
                                        }.into());
                                    }
                                    elements
                                }
                            })
                        }
                    }

                    // Priority selector
                    Select(
                        label: Some("Priority"),
                        options: priority_options,
                        selected_index: priority.get().index(),
                        has_focus: focused_field.get() == FormField::Priority,
                        value_color: Some(theme.priority_color(priority.get())),
                    )
                }

                // Footer
                Footer(shortcuts: form_shortcuts())
            }
        }
    }
}

/// Handle text input for single-line fields
fn handle_text_input(state: &mut State<String>, code: KeyCode) {
    match code {
        KeyCode::Char(c) => {
            let mut val = state.to_string();
            val.push(c);
            state.set(val);
        }
        KeyCode::Backspace => {
            let mut val = state.to_string();
            val.pop();
            state.set(val);
        }
        _ => {}
    }
}

/// Handle text input for the description field (Enter inserts a newline)
fn handle_multiline_input(state: &mut State<String>, code: KeyCode) {
    match code {
        KeyCode::Char(c) => {
            let mut val = state.to_string();
            val.push(c);
            state.set(val);
        }
        KeyCode::Backspace => {
            let mut val = state.to_string();
            val.pop();
            state.set(val);
        }
        KeyCode::Enter => {
            let mut val = state.to_string();
            val.push('\n');
            state.set(val);
        }
        _ => {}
    }
}

/// Handle select input for enum fields
fn handle_select_input<T: Selectable + Send + Sync + 'static>(state: &mut State<T>, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('h') => {
            state.set(state.get().prev());
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter | KeyCode::Char(' ') => {
            state.set(state.get().next());
        }
        _ => {}
    }
}
