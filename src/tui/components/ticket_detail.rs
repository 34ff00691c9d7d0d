//! Ticket detail pane component
//!
//! Displays the selected ticket's full metadata and description.

use iocraft::prelude::*;

use crate::ticket::Ticket;
use crate::tui::theme::theme;

/// Props for the TicketDetail component
#[derive(Default, Props)]
pub struct TicketDetailProps {
    /// The ticket to display (None shows the placeholder)
    pub ticket: Option<Ticket>,
    /// Whether the detail pane has focus
    pub has_focus: bool,
}

/// Ticket detail view showing metadata and the full description
#[component]
pub fn TicketDetail(props: &TicketDetailProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let Some(ticket) = props.ticket.clone() else {
        return element! {
            View(
                width: 100pct,
                height: 100pct,
                border_style: BorderStyle::Round,
                border_color: border_color,
                flex_direction: FlexDirection::Column,
                padding: 1,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(
                    content: "No ticket selected",
                    color: theme.text_dimmed,
                )
            }
        };
    };

    let status = ticket.status();
    let status_color = theme.status_color(status);
    let priority_color = theme.priority_color(ticket.priority());

    element! {
        View(
            width: 100pct,
            height: 100pct,
            border_style: BorderStyle::Round,
            border_color: border_color,
            flex_direction: FlexDirection::Column,
            overflow: Overflow::Hidden,
        ) {
            // Header with ID and title
            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                flex_direction: FlexDirection::Row,
                gap: 1,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
            ) {
                Text(
                    content: ticket.id().to_string(),
                    color: theme.id_color,
                    weight: Weight::Bold,
                )
                Text(
                    content: ticket.title().to_string(),
                    color: theme.text,
                    weight: Weight::Bold,
                )
            }

            // Metadata row
            View(
                width: 100pct,
                padding_left: 1,
                padding_right: 1,
                margin_top: 1,
                flex_direction: FlexDirection::Row,
                gap: 2,
            ) {
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(content: "Status:", color: theme.text_dimmed)
                    Text(content: status.to_string(), color: status_color)
                }
                View(flex_direction: FlexDirection::Row, gap: 1) {
                    Text(content: "Priority:", color: theme.text_dimmed)
                    Text(content: ticket.priority().to_string(), color: priority_color)
                }
            }

            // Description
            View(
                flex_grow: 1.0,
                width: 100pct,
                padding: 1,
                margin_top: 1,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                Text(
                    content: ticket.description().to_string(),
                    color: theme.text,
                )
            }
        }
    }
}
