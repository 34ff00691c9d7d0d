//! Scrollable ticket list component
//!
//! Displays the filtered tickets with selection highlighting and scrolling
//! support.

use iocraft::prelude::*;

use crate::ticket::Ticket;
use crate::tui::theme::theme;
use crate::types::TicketStatus;

/// Props for the TicketList component
#[derive(Default, Props)]
pub struct TicketListProps {
    /// Filtered tickets to display
    pub tickets: Vec<Ticket>,
    /// Index of the currently selected ticket
    pub selected_index: usize,
    /// Current scroll offset (first visible ticket index)
    pub scroll_offset: usize,
    /// Whether the list has focus
    pub has_focus: bool,
    /// Number of visible rows. Passed from the parent because scroll logic
    /// needs the row count for the "X more above/below" indicators.
    pub visible_height: usize,
}

/// Scrollable ticket list with selection
#[component]
pub fn TicketList(props: &TicketListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    // Calculate which tickets to show, accounting for scroll indicator lines
    let start = props.scroll_offset.min(props.tickets.len());
    let total = props.tickets.len();

    let has_more_above = start > 0;
    let above_indicator_lines = if has_more_above { 1 } else { 0 };

    let tentative_rows = props.visible_height.saturating_sub(above_indicator_lines);
    let tentative_end = (start + tentative_rows).min(total);

    let has_more_below = tentative_end < total;
    let below_indicator_lines = if has_more_below { 1 } else { 0 };

    let available_rows = props
        .visible_height
        .saturating_sub(above_indicator_lines + below_indicator_lines);
    let end = (start + available_rows).min(total);
    let visible_tickets: Vec<Ticket> = props.tickets[start..end].to_vec();

    let has_more_below = end < total;

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            #(if has_more_above {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("  {} more above", start),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })

            #(visible_tickets.iter().enumerate().map(|(i, ticket)| {
                let actual_index = start + i;
                let is_selected = actual_index == props.selected_index;
                element! {
                    TicketRow(
                        ticket: Some(ticket.clone()),
                        is_selected: is_selected,
                    )
                }
            }))

            #(if has_more_below {
                Some(element! {
                    View(height: 1, padding_left: 1) {
                        Text(
                            content: format!("  {} more below", total - end),
                            color: theme.text_dimmed,
                        )
                    }
                })
            } else {
                None
            })
        }
    }
}

/// Props for a single ticket row
#[derive(Default, Props)]
pub struct TicketRowProps {
    /// The ticket to display
    pub ticket: Option<Ticket>,
    /// Whether this row is selected
    pub is_selected: bool,
}

/// Single ticket row in the list
#[component]
pub fn TicketRow(props: &TicketRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(ticket) = props.ticket.clone() else {
        return element! {
            View(height: 1, width: 100pct)
        };
    };

    let status = ticket.status();
    let status_color = theme.status_color(status);
    let priority_color = theme.priority_color(ticket.priority());
    let bg_color = if props.is_selected {
        Some(theme.highlight)
    } else {
        None
    };
    let text_color = if props.is_selected {
        theme.highlight_text
    } else {
        theme.text
    };

    let indicator = if props.is_selected { ">" } else { " " };

    let status_str = match status {
        TicketStatus::Open => "opn",
        TicketStatus::Closed => "cls",
    };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            // Selection indicator - fixed width, won't shrink
            View(width: 2, flex_shrink: 0.0) {
                Text(content: indicator, color: text_color)
            }

            // Ticket ID - fixed width, won't shrink
            View(width: 9, flex_shrink: 0.0) {
                Text(
                    content: format!("{:<8}", ticket.id()),
                    color: if props.is_selected { theme.highlight_text } else { theme.id_color },
                )
            }

            // Status badge - fixed width, won't shrink
            View(width: 6, flex_shrink: 0.0) {
                Text(
                    content: format!("[{}]", status_str),
                    color: if props.is_selected { theme.highlight_text } else { status_color },
                )
            }

            // Priority - fixed width, won't shrink
            View(width: 7, flex_shrink: 0.0) {
                Text(
                    content: ticket.priority().to_string(),
                    color: if props.is_selected { theme.highlight_text } else { priority_color },
                )
            }

            // Title - flexible, takes remaining space and truncates via overflow
            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                Text(
                    content: format!(" {}", ticket.title()),
                    color: text_color,
                )
            }
        }
    }
}
