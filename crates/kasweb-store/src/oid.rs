//! Document identifier generation and validation
//!
//! Ids are 24-character lowercase hex strings built from the current
//! timestamp, the process id and a monotonic counter, so they stay unique
//! within a process even when generated in the same nanosecond. Ids are
//! opaque to callers and never reused.

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{24}$").expect("id pattern is valid")
});

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Generate a new document id.
///
/// Layout: 8 hex chars of unix seconds, 6 of sub-second nanos,
/// 4 of process id, 6 of a per-process counter.
pub fn generate() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let secs = now.as_secs() as u32;
    let nanos = now.subsec_nanos() & 0x00ff_ffff;
    let pid = (std::process::id() & 0xffff) as u16;
    let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

    format!("{:08x}{:06x}{:04x}{:06x}", secs, nanos, pid, count)
}

/// Check whether a string is a well-formed document id.
pub fn is_valid(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_id_shape() {
        let id = generate();
        assert_eq!(id.len(), 24);
        assert!(is_valid(&id));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_is_valid_rejects_malformed_ids() {
        assert!(!is_valid(""));
        assert!(!is_valid("abc"));
        assert!(!is_valid("not-a-hex-identifier!!!!"));
        // wrong length
        assert!(!is_valid("0123456789abcdef0123456"));
        assert!(!is_valid("0123456789abcdef012345678"));
        // uppercase hex is not canonical
        assert!(!is_valid("0123456789ABCDEF01234567"));
    }

    #[test]
    fn test_is_valid_accepts_canonical_ids() {
        assert!(is_valid("0123456789abcdef01234567"));
        assert!(is_valid("ffffffffffffffffffffffff"));
    }
}
