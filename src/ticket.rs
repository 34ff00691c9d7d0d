//! The ticket record.
//!
//! Fields other than `status` are fixed at construction; `status` changes
//! only through [`Ticket::toggle_status`], which the store calls on behalf
//! of the UI.

use serde::{Deserialize, Serialize};

use crate::types::{TicketPriority, TicketStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: String,
    title: String,
    description: String,
    priority: TicketPriority,
    // Records predating the status field read as open.
    #[serde(default)]
    status: TicketStatus,
}

impl Ticket {
    /// Build a new open ticket. Callers are expected to have trimmed and
    /// validated `title` and `description` already; the store's create path
    /// is the only producer.
    pub(crate) fn new(
        id: String,
        title: String,
        description: String,
        priority: TicketPriority,
    ) -> Self {
        Self {
            id,
            title,
            description,
            priority,
            status: TicketStatus::Open,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> TicketPriority {
        self.priority
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    /// Anything that has not been explicitly closed counts as open.
    pub fn is_open(&self) -> bool {
        self.status != TicketStatus::Closed
    }

    pub(crate) fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }

    /// Case-insensitive substring match over title and description.
    /// `needle` must already be lowercased.
    pub(crate) fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
