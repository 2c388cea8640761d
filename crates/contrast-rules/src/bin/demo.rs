//! Demonstration entry point.
//!
//! Prints a single confirmation line and exits successfully. None of the
//! contrast functions are invoked from here; compiling them is the point.

fn main() {
    println!("{}", contrast_rules::CONFIRMATION);
}
