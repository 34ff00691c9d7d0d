use rand::Rng;
use uuid::Uuid;

/// Prefix for all ticket IDs.
const ID_PREFIX: &str = "tkt";

/// Generate a random hex hash of the specified length
///
/// Generates random bytes and hex-encodes them directly, returning the first
/// `length` hex characters.
pub fn generate_hash(length: usize) -> String {
    // Each byte produces 2 hex characters, so we need ceil(length / 2) bytes
    let num_bytes = length.div_ceil(2);
    let mut buf = vec![0u8; num_bytes];
    rand::rng().fill(&mut buf[..]);
    let hex: String = buf.iter().map(|b| format!("{b:02x}")).collect();
    hex[..length].to_string()
}

/// Generate a UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a unique short ticket ID.
///
/// Tries `tkt-<hash>` candidates with hash lengths 4 through 8, checking
/// each against `is_taken` (the caller supplies the session's existing IDs).
/// If every retry collides, falls back to a UUID v4, so allocation never
/// fails.
pub fn generate_ticket_id<F>(is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    const RETRIES_PER_LENGTH: u32 = 40;

    for length in 4..=8 {
        for _ in 0..RETRIES_PER_LENGTH {
            let candidate = format!("{ID_PREFIX}-{}", generate_hash(length));
            if !is_taken(&candidate) {
                return candidate;
            }
        }
    }

    format!("{ID_PREFIX}-{}", generate_uuid())
}
