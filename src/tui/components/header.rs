//! App header bar component
//!
//! Displays the application title, the live open-ticket count, and how many
//! tickets the current filter is showing.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps<'a> {
    /// Title (defaults to "Quickdesk")
    pub title: Option<&'a str>,

    /// Count of tickets not yet closed
    pub open_count: Option<usize>,

    /// Count of tickets the current filter is showing
    pub shown_count: Option<usize>,
}

/// App header bar
#[component]
pub fn Header<'a>(props: &HeaderProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let title = props.title.unwrap_or("Quickdesk").to_string();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: title,
                color: theme.highlight_text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(props.open_count.map(|count| element! {
                    Text(
                        content: format!("{} open", count),
                        color: theme.highlight_text,
                        weight: Weight::Bold,
                    )
                }))
                #(props.shown_count.map(|count| element! {
                    Text(
                        content: format!("{} shown", count),
                        color: theme.highlight_text,
                    )
                }))
            }
        }
    }
}
