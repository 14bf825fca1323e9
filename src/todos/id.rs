//! Todo ID generation utilities.
//!
//! IDs combine the creation time in milliseconds with a 4-character random
//! hex suffix. Bare timestamps collide under rapid successive creation
//! within the same millisecond; the suffix closes that gap.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Global counter for deterministic ID generation in tests.
static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Whether to use deterministic IDs (for testing).
static USE_DETERMINISTIC_IDS: AtomicBool = AtomicBool::new(false);

/// Enable deterministic ID generation for testing.
///
/// When enabled, IDs are `todo-<counter>` instead of timestamp plus random hex.
pub fn enable_deterministic_ids() {
    USE_DETERMINISTIC_IDS.store(true, Ordering::SeqCst);
    TEST_COUNTER.store(0, Ordering::SeqCst);
}

/// Disable deterministic ID generation.
pub fn disable_deterministic_ids() {
    USE_DETERMINISTIC_IDS.store(false, Ordering::SeqCst);
}

/// Current time in milliseconds since the Unix epoch.
fn now_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

/// Generate a random 4-character hex suffix.
#[allow(clippy::cast_possible_truncation)]
fn random_suffix() -> String {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};

    let state = RandomState::new();
    let mut hasher = state.build_hasher();
    // Truncation is intentional - we only need entropy, not precision
    hasher.write_u64(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64),
    );
    let hash = hasher.finish();
    format!("{:04x}", hash & 0xFFFF)
}

/// Generate a fresh todo ID.
///
/// The ID is the creation time in milliseconds plus a 4-character random
/// hex suffix, e.g. `1724400000000-ab12`.
#[must_use]
pub fn generate_todo_id() -> String {
    if USE_DETERMINISTIC_IDS.load(Ordering::SeqCst) {
        let count = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        format!("todo-{count:04x}")
    } else {
        format!("{}-{}", now_millis(), random_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_deterministic_ids_increment() {
        enable_deterministic_ids();

        let id1 = generate_todo_id();
        let id2 = generate_todo_id();
        let id3 = generate_todo_id();

        assert_eq!(id1, "todo-0000");
        assert_eq!(id2, "todo-0001");
        assert_eq!(id3, "todo-0002");

        disable_deterministic_ids();
    }

    #[test]
    #[serial_test::serial]
    fn test_generate_todo_id_format() {
        disable_deterministic_ids();

        let id = generate_todo_id();
        let (millis, suffix) = id.split_once('-').unwrap();
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    #[serial_test::serial]
    fn test_random_ids_likely_unique() {
        disable_deterministic_ids();

        // Note: there's a tiny chance (1/65536 per pair within the same
        // millisecond) of a collision, which the store guards against anyway.
        let ids: Vec<String> = (0..10).map(|_| generate_todo_id()).collect();
        let unique: std::collections::HashSet<&String> = ids.iter().collect();
        assert!(unique.len() >= 2);
    }
}
