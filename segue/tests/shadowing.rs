//! An unrelated `is_continuation` visible at the call site must never
//! replace the handler's declared answer.

use segue::{IsContinuation, resolve_continuation};

mod common;
use common::{Plain, expected};

/// Free function with the customization point's name.
#[allow(dead_code)]
fn is_continuation<T: ?Sized>(_handler: &T) -> bool {
    true
}

mod unrelated {
    /// Another crate's helper that happens to share the name.
    pub fn is_continuation(_code: u32) -> bool {
        true
    }
}

/// Declares `false` through the trait, `true` through an inherent method.
struct Timer;

impl Timer {
    fn is_continuation(&self) -> bool {
        true
    }
}

impl IsContinuation for Timer {
    fn is_continuation(&self) -> bool {
        false
    }
}

/// Declares `true` through the trait, `false` through an inherent method.
struct Step;

impl Step {
    #[allow(dead_code)]
    fn is_continuation(&self) -> bool {
        false
    }
}

impl IsContinuation for Step {
    fn is_continuation(&self) -> bool {
        true
    }
}

#[test]
fn test_free_function_in_caller_scope() {
    assert!(is_continuation(&Plain));
    assert!(!resolve_continuation(&Plain));
}

#[test]
fn test_imported_function_with_same_name() {
    use unrelated::is_continuation as helper;
    assert!(helper(0));
    assert!(!resolve_continuation(&Plain));
}

#[test]
fn test_inherent_method_does_not_shadow() {
    // Method-call syntax picks the inherent method...
    assert!(Timer.is_continuation());
    // ...the dispatcher always picks the declaration.
    assert!(!resolve_continuation(&Timer));
    assert_eq!(resolve_continuation(&Step), expected(true));
}

#[test]
fn test_macro_does_not_shadow() {
    assert!(!resolve_continuation!(Timer));
    assert_eq!(resolve_continuation!(Step), expected(true));
}
