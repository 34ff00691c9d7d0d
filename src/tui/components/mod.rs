//! Shared TUI components for the ticket browser

pub mod empty_state;
pub mod footer;
pub mod header;
pub mod search_box;
pub mod select;
pub mod ticket_detail;
pub mod ticket_form;
pub mod ticket_list;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps, compute_empty_state};
pub use footer::{
    Footer, FooterProps, Shortcut, browser_shortcuts, empty_shortcuts, form_shortcuts,
    search_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use search_box::{SearchBox, SearchBoxProps};
pub use select::{Select, SelectProps, Selectable, options_for};
pub use ticket_detail::{TicketDetail, TicketDetailProps};
pub use ticket_form::{FormField, FormResult, TicketForm, TicketFormProps};
pub use ticket_list::{TicketList, TicketListProps, TicketRow, TicketRowProps};
