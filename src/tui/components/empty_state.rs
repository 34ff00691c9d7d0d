//! Empty state component
//!
//! Displays helpful messages when there are no tickets or when nothing
//! matches the search filter.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// No tickets have been created in this session
    #[default]
    NoTickets,
    /// No tickets match the search filter
    NoSearchResults,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Optional search query (for NoSearchResults)
    pub search_query: Option<String>,
}

/// Compute which empty state applies, if any.
pub fn compute_empty_state(
    total_count: usize,
    filtered_count: usize,
    query: &str,
) -> Option<EmptyStateKind> {
    if total_count == 0 {
        Some(EmptyStateKind::NoTickets)
    } else if filtered_count == 0 && !query.trim().is_empty() {
        Some(EmptyStateKind::NoSearchResults)
    } else {
        None
    }
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::NoTickets => (
            "i",
            "No Tickets",
            "No tickets yet. Create your first ticket!",
            "Press 'n' to open the create form.",
        ),
        EmptyStateKind::NoSearchResults => (
            "?",
            "No Results",
            "No tickets match your search.",
            "Try a different search term, or press Esc to clear.",
        ),
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            // Icon in a box
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: theme.text_dimmed,
                    weight: Weight::Bold,
                )
            }

            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )

            View(margin_top: 1, max_width: 60) {
                Text(
                    content: message,
                    color: theme.text_dimmed,
                )
            }

            #(if props.kind == EmptyStateKind::NoSearchResults && props.search_query.is_some() {
                let query = props.search_query.clone().unwrap_or_default();
                Some(element! {
                    View(margin_top: 1) {
                        Text(
                            content: format!("Search: \"{}\"", query),
                            color: theme.status_open,
                        )
                    }
                })
            } else {
                None
            })

            View(margin_top: 2) {
                Text(
                    content: hint,
                    color: theme.text_dimmed,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tickets_wins_over_no_results() {
        assert_eq!(
            compute_empty_state(0, 0, "printer"),
            Some(EmptyStateKind::NoTickets)
        );
    }

    #[test]
    fn test_no_search_results() {
        assert_eq!(
            compute_empty_state(3, 0, "printer"),
            Some(EmptyStateKind::NoSearchResults)
        );
    }

    #[test]
    fn test_empty_query_with_tickets_is_not_empty_state() {
        assert_eq!(compute_empty_state(3, 3, ""), None);
        assert_eq!(compute_empty_state(3, 3, "   "), None);
    }

    #[test]
    fn test_matches_present() {
        assert_eq!(compute_empty_state(3, 1, "login"), None);
    }
}
