//! Cross-module tests for the ticket store
//!
//! Walks the store through realistic triage sessions: seed, create, search,
//! toggle, and check the derived views after each step.

use quickdesk::{TicketPriority, TicketStatus, TicketStore};

#[test]
fn test_triage_session_end_to_end() {
    // Start with the seeded sample ticket
    let mut store = TicketStore::with_sample_data();
    assert_eq!(store.len(), 1);
    assert_eq!(store.tickets()[0].title(), "Login error");
    assert!(store.tickets()[0].is_open());

    // Create a second ticket
    let printer = store
        .create("Printer jam", "Paper stuck", TicketPriority::Medium)
        .expect("valid input should create a ticket");

    // Newest first
    let titles: Vec<&str> = store.tickets().iter().map(|t| t.title()).collect();
    assert_eq!(titles, vec!["Printer jam", "Login error"]);
    assert_eq!(store.open_count(), 2);

    // Search narrows the view to the printer ticket
    store.set_query("printer");
    let filtered = store.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title(), "Printer jam");

    // Close it
    store.toggle_status(printer.id());
    assert_eq!(store.filtered()[0].status(), TicketStatus::Closed);
    assert_eq!(store.open_count(), 1);

    // The login ticket was untouched
    assert!(store.tickets()[1].is_open());
}

#[test]
fn test_search_does_not_disturb_the_collection() {
    let mut store = TicketStore::with_sample_data();
    store
        .create("Printer jam", "Paper stuck", TicketPriority::Medium)
        .unwrap();

    store.set_query("no such ticket anywhere");
    assert!(store.filtered().is_empty());

    // Clearing the query restores the full view, order intact
    store.set_query("");
    let filtered = store.filtered();
    let titles: Vec<&str> = filtered.iter().map(|t| t.title()).collect();
    assert_eq!(titles, vec!["Printer jam", "Login error"]);
}

#[test]
fn test_query_is_trimmed_and_lowercased_at_filter_time() {
    let mut store = TicketStore::with_sample_data();

    // Stored verbatim, matched case-insensitively with surrounding
    // whitespace ignored
    store.set_query("  LOGIN  ");
    assert_eq!(store.query(), "  LOGIN  ");
    assert_eq!(store.filtered().len(), 1);
}

#[test]
fn test_rejected_create_leaves_session_unchanged() {
    let mut store = TicketStore::with_sample_data();

    assert!(store.create("   ", "Paper stuck", TicketPriority::Low).is_none());
    assert!(store.create("Printer jam", "", TicketPriority::Low).is_none());

    assert_eq!(store.len(), 1);
    assert_eq!(store.open_count(), 1);
}

#[test]
fn test_toggle_from_filtered_view_mutates_the_collection() {
    let mut store = TicketStore::new();
    store
        .create("Login error", "User cannot login", TicketPriority::High)
        .unwrap();
    store
        .create("Printer jam", "Paper stuck", TicketPriority::Medium)
        .unwrap();

    // Find the ticket through a filtered view, then toggle by its id
    store.set_query("login");
    let id = store.filtered()[0].id().to_string();
    store.toggle_status(&id);

    store.set_query("");
    let login = store
        .tickets()
        .iter()
        .find(|t| t.id() == id)
        .expect("ticket still present");
    assert_eq!(login.status(), TicketStatus::Closed);
    assert_eq!(store.open_count(), 1);
}

#[test]
fn test_ids_stay_unique_across_a_session() {
    let mut store = TicketStore::new();
    let mut ids = std::collections::HashSet::new();
    for i in 0..25 {
        let ticket = store
            .create(
                &format!("Ticket {i}"),
                "Generated in bulk",
                TicketPriority::Low,
            )
            .unwrap();
        assert!(ids.insert(ticket.id().to_string()));
    }
    assert_eq!(store.len(), 25);
}
