//! Read-only-borrow contrast: a shared borrow guarantees the caller's value
//! is untouched; an exclusive borrow promises nothing and locks the caller
//! out for the duration.

/// Print a label through a shared borrow.
///
/// The signature alone guarantees the caller's string is unchanged after
/// the call.
pub fn print_label(label: &str) {
    println!("{label}");
}

/// The same read-only print demanding an exclusive borrow it never needs.
pub fn print_label_exclusive(label: &mut String) {
    println!("{label}");
}
