//! Ticket browser root component
//!
//! Renders the store-driven view (header with open count, search box,
//! ticket list, detail pane) and translates key events into store
//! operations.
//!
//! Layout:
//! ```text
//! +------------------------------------------+
//! | Header                                    |
//! +------------------------------------------+
//! | SearchBox                                 |
//! +--------------------+---------------------+
//! | TicketList         | TicketDetail        |
//! |                    |                     |
//! +--------------------+---------------------+
//! | Footer                                    |
//! +------------------------------------------+
//! ```

use iocraft::prelude::*;

use crate::store::TicketStore;
use crate::tui::components::{
    EmptyState, EmptyStateKind, Footer, FormResult, Header, SearchBox, TicketDetail, TicketForm,
    TicketList, browser_shortcuts, compute_empty_state, empty_shortcuts, form_shortcuts,
    search_shortcuts,
};
use crate::tui::keymap::{BrowserAction, key_to_action};
use crate::tui::navigation;
use crate::tui::state::Pane;
use crate::tui::theme::theme;

/// Props for the TicketBrowser component
#[derive(Default, Props)]
pub struct TicketBrowserProps {
    /// Store to browse; defaults to an empty one
    pub initial: Option<TicketStore>,
}

/// Main ticket browser component
#[component]
pub fn TicketBrowser<'a>(props: &TicketBrowserProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    // State management
    let initial = props.initial.clone().unwrap_or_default();
    let mut store: State<TicketStore> = hooks.use_state(move || initial);
    let mut search_query = hooks.use_state(String::new);
    let mut selected_index = hooks.use_state(|| 0usize);
    let mut scroll_offset = hooks.use_state(|| 0usize);
    let mut active_pane = hooks.use_state(Pane::default);
    let mut should_exit = hooks.use_state(|| false);
    let mut form_open = hooks.use_state(|| false);
    let mut form_result: State<FormResult> = hooks.use_state(FormResult::default);

    // Push the search box text into the store's query; the filtered view
    // derives from the store alone.
    let query_str = search_query.to_string();
    let query_changed = { store.read().query() != query_str.as_str() };
    if query_changed {
        let mut updated = (*store.read()).clone();
        updated.set_query(query_str.clone());
        store.set(updated);
        // Reset selection when the query changes
        selected_index.set(0);
        scroll_offset.set(0);
    }

    // Handle the form reporting a result
    match form_result.get() {
        FormResult::Submitted => {
            form_result.set(FormResult::Editing);
            form_open.set(false);
            // The new ticket was prepended; select it
            selected_index.set(0);
            scroll_offset.set(0);
        }
        FormResult::Cancelled => {
            form_result.set(FormResult::Editing);
            form_open.set(false);
        }
        FormResult::Editing => {}
    }

    let is_editing = form_open.get();

    // Derived view, recomputed every render
    let (filtered, open_count, total_count) = {
        let store_ref = store.read();
        (
            store_ref.filtered(),
            store_ref.open_count(),
            store_ref.len(),
        )
    };
    let shown_count = filtered.len();

    // Total height - header (1) - search box (3) - footer (1) - borders (2)
    let list_height = height.saturating_sub(7) as usize;

    // Keyboard event handling
    hooks.use_terminal_events({
        let filtered_ids: Vec<String> = filtered.iter().map(|t| t.id().to_string()).collect();
        move |event| {
            // Skip if the form is open (it handles its own events)
            if is_editing {
                return;
            }

            match event {
                TerminalEvent::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) if kind != KeyEventKind::Release => {
                    let Some(action) = key_to_action(code, modifiers, active_pane.get()) else {
                        return;
                    };

                    let mut idx = selected_index.get();
                    let mut off = scroll_offset.get();
                    let count = filtered_ids.len();

                    match action {
                        BrowserAction::MoveDown => {
                            navigation::scroll_down(&mut idx, &mut off, count, list_height);
                        }
                        BrowserAction::MoveUp => {
                            navigation::scroll_up(&mut idx, &mut off);
                        }
                        BrowserAction::GoToTop => {
                            navigation::scroll_to_top(&mut idx, &mut off);
                        }
                        BrowserAction::GoToBottom => {
                            navigation::scroll_to_bottom(&mut idx, &mut off, count, list_height);
                        }
                        BrowserAction::PageDown => {
                            navigation::page_down(&mut idx, &mut off, count, list_height);
                        }
                        BrowserAction::PageUp => {
                            navigation::page_up(&mut idx, &mut off, list_height);
                        }
                        BrowserAction::CyclePaneForward => {
                            active_pane.set(active_pane.get().next());
                        }
                        BrowserAction::CyclePaneBackward => {
                            active_pane.set(active_pane.get().prev());
                        }
                        BrowserAction::FocusSearch => {
                            active_pane.set(Pane::Search);
                        }
                        BrowserAction::ExitSearch => {
                            active_pane.set(Pane::List);
                        }
                        BrowserAction::ClearSearchAndExit => {
                            search_query.set(String::new());
                            active_pane.set(Pane::List);
                        }
                        BrowserAction::OpenForm => {
                            form_open.set(true);
                        }
                        BrowserAction::ToggleSelected => {
                            if let Some(id) = filtered_ids.get(selected_index.get()) {
                                let mut updated = (*store.read()).clone();
                                updated.toggle_status(id);
                                store.set(updated);
                            }
                        }
                        BrowserAction::Quit => {
                            should_exit.set(true);
                        }
                    }

                    selected_index.set(idx);
                    scroll_offset.set(off);
                }
                _ => {}
            }
        }
    });

    // Exit if requested
    if should_exit.get() {
        system.exit();
    }

    // Reset selection if it's out of bounds after filtering
    if selected_index.get() >= filtered.len() && !filtered.is_empty() {
        selected_index.set(filtered.len() - 1);
    }
    if scroll_offset.get() > selected_index.get() {
        scroll_offset.set(selected_index.get());
    }

    let selected_ticket = filtered.get(selected_index.get()).cloned();

    let empty_state_kind = compute_empty_state(total_count, shown_count, &query_str);
    let show_full_empty_state = empty_state_kind == Some(EmptyStateKind::NoTickets);

    let shortcuts = if is_editing {
        form_shortcuts()
    } else if show_full_empty_state {
        empty_shortcuts()
    } else {
        match active_pane.get() {
            Pane::Search => search_shortcuts(),
            _ => browser_shortcuts(),
        }
    };

    let theme = theme();

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            // Header
            Header(
                open_count: Some(open_count),
                shown_count: Some(shown_count),
            )

            #(if show_full_empty_state {
                Some(element! {
                    View(flex_grow: 1.0, width: 100pct) {
                        EmptyState(
                            kind: EmptyStateKind::NoTickets,
                        )
                    }
                })
            } else {
                Some(element! {
                    View(
                        flex_grow: 1.0,
                        flex_direction: FlexDirection::Column,
                        width: 100pct,
                    ) {
                        // Search box
                        View(
                            width: 100pct,
                            padding_left: 1,
                            padding_right: 1,
                        ) {
                            SearchBox(
                                value: Some(search_query),
                                has_focus: active_pane.get() == Pane::Search && !is_editing,
                            )
                        }

                        // Main content area: List + Detail (or empty search state)
                        #(if empty_state_kind == Some(EmptyStateKind::NoSearchResults) {
                            Some(element! {
                                View(
                                    flex_grow: 1.0,
                                    width: 100pct,
                                ) {
                                    EmptyState(
                                        kind: EmptyStateKind::NoSearchResults,
                                        search_query: Some(query_str.clone()),
                                    )
                                }
                            })
                        } else {
                            Some(element! {
                                View(
                                    flex_grow: 1.0,
                                    flex_direction: FlexDirection::Row,
                                    width: 100pct,
                                ) {
                                    // Left pane: ticket list
                                    View(
                                        width: 40pct,
                                        height: 100pct,
                                    ) {
                                        TicketList(
                                            tickets: filtered.clone(),
                                            selected_index: selected_index.get(),
                                            scroll_offset: scroll_offset.get(),
                                            has_focus: active_pane.get() == Pane::List && !is_editing,
                                            visible_height: list_height,
                                        )
                                    }

                                    // Right pane: ticket detail
                                    View(
                                        flex_grow: 1.0,
                                        height: 100pct,
                                    ) {
                                        TicketDetail(
                                            ticket: selected_ticket.clone(),
                                            has_focus: active_pane.get() == Pane::Detail && !is_editing,
                                        )
                                    }
                                }
                            })
                        })
                    }
                })
            })

            // Footer
            Footer(shortcuts: shortcuts)

            // Create form overlay
            #(if is_editing {
                Some(element! {
                    TicketForm(
                        store: Some(store),
                        on_close: Some(form_result),
                    )
                })
            } else {
                None
            })
        }
    }
}
