//! Naming contrast: `snake_case` values, `UpperCamelCase` types,
//! `SCREAMING_SNAKE_CASE` constants.
//!
//! Nothing here has behaviour; the names are the content.

/// Days elapsed since the demo ledger was created.
pub const DAYS_SINCE_CREATION: u32 = 0;

/// Manages a single account balance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccountManager {
    /// Current balance, in minor currency units.
    pub balance_amount: i64,
}

/// The discouraged spelling of the same items: unclear single-letter
/// value, lower-case type, mixed-case field. Kept for side-by-side
/// comparison; never used by the shipped path.
#[allow(nonstandard_style)]
pub mod discouraged {
    /// "d" for days, context lost at every use site.
    pub static d: u32 = 0;

    pub struct manager {
        pub Val: i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_compile_and_are_accessible() {
        let manager = AccountManager {
            balance_amount: 100,
        };
        assert_eq!(manager.balance_amount, 100);
        assert_eq!(DAYS_SINCE_CREATION, 0);
    }

    #[test]
    fn test_discouraged_names_compile_too() {
        let poor = discouraged::manager { Val: 100 };
        assert_eq!(poor.Val, 100);
        assert_eq!(discouraged::d, 0);
    }
}
