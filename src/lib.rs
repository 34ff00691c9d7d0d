pub mod error;
pub mod store;
pub mod ticket;
pub mod tui;
pub mod types;
pub mod utils;

pub use error::{QuickdeskError, Result};
pub use store::TicketStore;
pub use ticket::Ticket;
pub use types::{TicketPriority, TicketStatus, VALID_PRIORITIES, VALID_STATUSES};
