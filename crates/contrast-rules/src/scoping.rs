//! Scoping contrast: items grouped under a named module, against a flat
//! layout held together by a glob import.

/// Greeting helpers under their own named scope.
pub mod banner {
    /// Write the fixed greeting to standard output.
    pub fn print_greeting() {
        println!("Hello World");
    }
}

/// The discouraged layout: a glob import drags every name into scope, and
/// a generically named free function sits one more glob away from a
/// collision. Never used by the shipped path.
#[allow(unused_imports, dead_code)]
mod flat {
    use super::banner::*;

    fn count() -> u64 {
        0
    }
}
