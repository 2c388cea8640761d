//! Pass-by-reference contrast: a borrowed slice against an owned vector.

/// Walk the entries through a shared slice borrow; nothing is copied and
/// nothing is written back.
pub fn scan_entries(entries: &[i64]) {
    // Read-only traversal.
    let _checksum: i64 = entries.iter().copied().fold(0, i64::wrapping_add);
}

/// The same read-only walk taking the vector by value, so every caller
/// must give up (or clone) their data.
pub fn scan_entries_owned(entries: Vec<i64>) {
    let _checksum: i64 = entries.iter().copied().fold(0, i64::wrapping_add);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrowed_scan_leaves_the_caller_in_possession() {
        let entries = vec![1, 2, 3];

        scan_entries(&entries);

        // Still ours, still intact.
        assert_eq!(entries, [1, 2, 3]);
    }

    #[test]
    fn test_owned_scan_consumes_the_argument() {
        let entries = vec![1, 2, 3];

        // Without the clone, `entries` would be gone after this call.
        scan_entries_owned(entries.clone());

        assert_eq!(entries, [1, 2, 3]);
    }

    #[test]
    fn test_scan_accepts_an_empty_slice() {
        scan_entries(&[]);
    }
}
