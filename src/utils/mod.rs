pub mod id;

pub use id::{generate_hash, generate_ticket_id, generate_uuid};
