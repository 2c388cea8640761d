//! Control-structure contrast: a structured two-way branch with an early
//! return, against the same branch compressed onto one line.
//!
//! The actions are injected so tests can observe which one ran.

/// Route to exactly one action: the urgent one when the flag is set
/// (returning immediately), the routine one otherwise.
pub fn route(urgent: bool, on_urgent: impl FnOnce(), on_routine: impl FnOnce()) {
    if urgent {
        on_urgent();
        return;
    }

    on_routine();
}

/// Behaviourally identical to [`route`]; the compressed layout is what this
/// rendition is discouraged for.
pub fn route_cramped(urgent: bool, on_urgent: impl FnOnce(), on_routine: impl FnOnce()) {
    if urgent { on_urgent(); return; } else { on_routine(); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgent_runs_only_the_urgent_action() {
        let mut urgent_ran = false;
        let mut routine_ran = false;

        route(true, || urgent_ran = true, || routine_ran = true);

        assert!(urgent_ran);
        assert!(!routine_ran);
    }

    #[test]
    fn test_routine_runs_only_the_routine_action() {
        let mut urgent_ran = false;
        let mut routine_ran = false;

        route(false, || urgent_ran = true, || routine_ran = true);

        assert!(!urgent_ran);
        assert!(routine_ran);
    }

    #[test]
    fn test_cramped_rendition_behaves_identically() {
        for urgent in [true, false] {
            let mut structured = (false, false);
            let mut cramped = (false, false);

            route(urgent, || structured.0 = true, || structured.1 = true);
            route_cramped(urgent, || cramped.0 = true, || cramped.1 = true);

            assert_eq!(structured, cramped);
        }
    }
}
