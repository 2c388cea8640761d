//! Null-representation contrast: a typed `None` against a bare zero.
//!
//! [`submit`] is statically dispatched over [`SubmitArg`], which has exactly
//! two implementations: an integer flavour and a reference flavour. A typed
//! `None` can only ever select the reference flavour; a bare `0` is an
//! integer and selects the integer flavour, even when "no reference" was
//! what the caller meant. The selected flavour is returned so tests can
//! capture which one executed.

use crate::naming::AccountManager;

/// Which parameter flavour a submission resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// The integer flavour ran.
    Integer,
    /// The reference flavour ran.
    Reference,
}

/// Argument flavours [`submit`] accepts. Resolution happens at compile
/// time; there is no runtime inspection.
pub trait SubmitArg {
    /// Report which flavour this argument selects.
    fn resolve(self) -> Resolved;
}

impl SubmitArg for u64 {
    fn resolve(self) -> Resolved {
        Resolved::Integer
    }
}

impl<'a> SubmitArg for Option<&'a AccountManager> {
    fn resolve(self) -> Resolved {
        Resolved::Reference
    }
}

/// Statically dispatch to exactly one flavour.
pub fn submit(argument: impl SubmitArg) -> Resolved {
    argument.resolve()
}

/// An absent reference spelled as a typed `None`: unambiguously the
/// reference flavour.
pub fn submit_absent() -> Resolved {
    submit(None::<&AccountManager>)
}

/// An absent reference spelled as a bare zero: an integer, so the integer
/// flavour runs. This is the ambiguity the contrast exists to show.
pub fn submit_zero() -> Resolved {
    submit(0u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_none_selects_the_reference_flavour() {
        assert_eq!(submit_absent(), Resolved::Reference);
    }

    #[test]
    fn test_bare_zero_selects_the_integer_flavour() {
        assert_eq!(submit_zero(), Resolved::Integer);
    }

    #[test]
    fn test_present_reference_selects_the_reference_flavour() {
        let manager = AccountManager::default();
        assert_eq!(submit(Some(&manager)), Resolved::Reference);
    }
}
