//! In-memory ticket store.
//!
//! Owns the authoritative ordered collection of tickets (newest first) and
//! the current search query, and derives the filtered view and open count
//! from them. Nothing is persisted; the store lives for the process.

use crate::ticket::Ticket;
use crate::types::TicketPriority;
use crate::utils::generate_ticket_id;

#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    query: String,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with one sample ticket, for demo sessions.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        store.create(
            "Login error",
            "User cannot login after password reset.",
            TicketPriority::High,
        );
        store
    }

    /// Create a ticket from form input.
    ///
    /// Title and description are trimmed before validation; if either is
    /// empty afterwards the input is rejected and the collection is left
    /// untouched. On success the new ticket is prepended (newest first) and
    /// a clone of it is returned.
    pub fn create(
        &mut self,
        title: &str,
        description: &str,
        priority: TicketPriority,
    ) -> Option<Ticket> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() || description.is_empty() {
            tracing::debug!("rejected ticket create with blank title or description");
            return None;
        }

        let id = generate_ticket_id(|candidate| self.tickets.iter().any(|t| t.id() == candidate));
        let ticket = Ticket::new(
            id,
            title.to_string(),
            description.to_string(),
            priority,
        );
        tracing::debug!(id = %ticket.id(), "created ticket");
        self.tickets.insert(0, ticket.clone());
        Some(ticket)
    }

    /// Flip a ticket's status between open and closed. Unknown IDs are a
    /// silent no-op.
    pub fn toggle_status(&mut self, id: &str) {
        match self.tickets.iter_mut().find(|t| t.id() == id) {
            Some(ticket) => {
                ticket.toggle_status();
                tracing::debug!(id = %id, status = %ticket.status(), "toggled ticket status");
            }
            None => {
                tracing::debug!(id = %id, "toggle requested for unknown ticket id");
            }
        }
    }

    /// Replace the search query verbatim. Trimming happens at filter time.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The tickets matching the current query, in original relative order.
    ///
    /// The query is trimmed and lowercased; when it comes out empty the full
    /// collection is returned unchanged. Recomputed on every call; at this
    /// scale an incremental index would be overkill.
    pub fn filtered(&self) -> Vec<Ticket> {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return self.tickets.clone();
        }
        self.tickets
            .iter()
            .filter(|t| t.matches_query(&needle))
            .cloned()
            .collect()
    }

    /// Count of tickets not explicitly closed.
    pub fn open_count(&self) -> usize {
        self.tickets.iter().filter(|t| t.is_open()).count()
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketStatus;
    use std::collections::HashSet;

    fn store_with(titles: &[(&str, &str)]) -> TicketStore {
        let mut store = TicketStore::new();
        for (title, description) in titles {
            store
                .create(title, description, TicketPriority::Low)
                .expect("test ticket should be valid");
        }
        store
    }

    #[test]
    fn test_create_prepends_open_ticket() {
        let mut store = TicketStore::new();
        let first = store
            .create("First", "The first ticket", TicketPriority::Low)
            .unwrap();
        let second = store
            .create("Second", "The second ticket", TicketPriority::High)
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.tickets()[0].id(), second.id());
        assert_eq!(store.tickets()[1].id(), first.id());
        assert_eq!(second.status(), TicketStatus::Open);
        assert_eq!(second.priority(), TicketPriority::High);
    }

    #[test]
    fn test_create_trims_title_and_description() {
        let mut store = TicketStore::new();
        let ticket = store
            .create("  Login error  ", "\tUser cannot login\n", TicketPriority::Low)
            .unwrap();
        assert_eq!(ticket.title(), "Login error");
        assert_eq!(ticket.description(), "User cannot login");
    }

    #[test]
    fn test_create_rejects_blank_input() {
        let mut store = TicketStore::new();
        assert!(store.create("", "Has a description", TicketPriority::Low).is_none());
        assert!(store.create("Has a title", "", TicketPriority::Low).is_none());
        assert!(store.create("   ", "\t\n", TicketPriority::Low).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut store = TicketStore::new();
        let mut seen = HashSet::new();
        for i in 0..100 {
            let ticket = store
                .create(&format!("Ticket {i}"), "body", TicketPriority::Low)
                .unwrap();
            assert!(seen.insert(ticket.id().to_string()), "duplicate id");
        }
    }

    #[test]
    fn test_toggle_status_is_involution() {
        let mut store = store_with(&[("Login error", "cannot login")]);
        let id = store.tickets()[0].id().to_string();

        store.toggle_status(&id);
        assert_eq!(store.tickets()[0].status(), TicketStatus::Closed);
        store.toggle_status(&id);
        assert_eq!(store.tickets()[0].status(), TicketStatus::Open);
    }

    #[test]
    fn test_toggle_status_unknown_id_is_noop() {
        let mut store = store_with(&[("Login error", "cannot login")]);
        let before = store.tickets().to_vec();
        store.toggle_status("tkt-nope");
        assert_eq!(store.tickets(), &before[..]);
    }

    #[test]
    fn test_toggle_status_leaves_other_tickets_untouched() {
        let mut store = store_with(&[("One", "first"), ("Two", "second"), ("Three", "third")]);
        let middle_id = store.tickets()[1].id().to_string();
        store.toggle_status(&middle_id);

        assert_eq!(store.tickets()[0].status(), TicketStatus::Open);
        assert_eq!(store.tickets()[1].status(), TicketStatus::Closed);
        assert_eq!(store.tickets()[2].status(), TicketStatus::Open);
    }

    #[test]
    fn test_filtered_empty_query_returns_all_in_order() {
        let store = store_with(&[("One", "first"), ("Two", "second")]);
        let filtered = store.filtered();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].title(), "Two");
        assert_eq!(filtered[1].title(), "One");
    }

    #[test]
    fn test_filtered_whitespace_query_returns_all() {
        let mut store = store_with(&[("One", "first")]);
        store.set_query("   ");
        assert_eq!(store.filtered().len(), 1);
    }

    #[test]
    fn test_filtered_is_case_insensitive() {
        let mut store = store_with(&[("Login error", "User cannot login")]);
        store.set_query("LOGIN");
        let filtered = store.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title(), "Login error");
    }

    #[test]
    fn test_filtered_matches_description() {
        let mut store = store_with(&[
            ("Printer jam", "Paper stuck in tray"),
            ("Login error", "User cannot login"),
        ]);
        store.set_query("paper");
        let filtered = store.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title(), "Printer jam");
    }

    #[test]
    fn test_filtered_preserves_relative_order() {
        let mut store = store_with(&[
            ("Fix login page", "a"),
            ("Unrelated", "b"),
            ("Login error", "c"),
        ]);
        store.set_query("login");
        let filtered = store.filtered();
        assert_eq!(filtered.len(), 2);
        // Newest first, as in the underlying collection
        assert_eq!(filtered[0].title(), "Login error");
        assert_eq!(filtered[1].title(), "Fix login page");
    }

    #[test]
    fn test_filtered_no_matches_is_empty() {
        let mut store = store_with(&[("Login error", "cannot login")]);
        store.set_query("printer");
        assert!(store.filtered().is_empty());
    }

    #[test]
    fn test_set_query_stores_verbatim() {
        let mut store = TicketStore::new();
        store.set_query("  Printer ");
        assert_eq!(store.query(), "  Printer ");
    }

    #[test]
    fn test_open_count() {
        let mut store = store_with(&[("One", "a"), ("Two", "b"), ("Three", "c")]);
        let id = store.tickets()[1].id().to_string();
        store.toggle_status(&id);
        // Statuses are now [open, closed, open]
        assert_eq!(store.open_count(), 2);
    }

    #[test]
    fn test_with_sample_data() {
        let store = TicketStore::with_sample_data();
        assert_eq!(store.len(), 1);
        let ticket = &store.tickets()[0];
        assert_eq!(ticket.title(), "Login error");
        assert_eq!(ticket.priority(), TicketPriority::High);
        assert!(ticket.is_open());
    }
}
