use segue::{DispatchHint, IsContinuation, resolve_continuation};

mod common;
use common::{
    AlwaysContinuation, NeverContinuation, Plain, ReadHandler, Wrapper, expected,
};

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_no_override_is_not_continuation() {
    assert!(!resolve_continuation(&Plain));
}

#[test]
fn test_override_true_is_continuation() {
    assert_eq!(resolve_continuation(&AlwaysContinuation), expected(true));
}

#[test]
fn test_override_false_is_not_continuation() {
    assert!(!resolve_continuation(&NeverContinuation));
}

#[test]
fn test_composite_forwards_to_inner() {
    assert_eq!(
        resolve_continuation(&Wrapper {
            inner: AlwaysContinuation
        }),
        expected(true)
    );
    assert!(!resolve_continuation(&Wrapper {
        inner: NeverContinuation
    }));
    assert!(!resolve_continuation(&Wrapper { inner: Plain }));
}

#[test]
fn test_composite_forwards_through_layers() {
    let nested = Wrapper {
        inner: Wrapper {
            inner: Wrapper {
                inner: ReadHandler::new(true),
            },
        },
    };
    assert_eq!(resolve_continuation(&nested), expected(true));
}

#[test]
fn test_repeated_calls_are_constant() {
    let continuing = AlwaysContinuation;
    let plain = Plain;

    let first = resolve_continuation(&continuing);
    for _ in 0..1000 {
        assert_eq!(resolve_continuation(&continuing), first);
        assert!(!resolve_continuation(&plain));
    }
}

#[test]
fn test_query_does_not_mutate_handler() {
    let handler = ReadHandler::new(true);
    let before = ReadHandler::new(true);

    for _ in 0..10 {
        resolve_continuation(&handler);
    }

    assert_eq!(handler, before);
}

#[test]
fn test_answer_follows_instance_state() {
    assert_eq!(resolve_continuation(&ReadHandler::new(true)), expected(true));
    assert!(!resolve_continuation(&ReadHandler::new(false)));
}

#[test]
fn test_heterogeneous_trait_objects() {
    let handlers: Vec<Box<dyn IsContinuation>> = vec![
        Box::new(Plain),
        Box::new(AlwaysContinuation),
        Box::new(NeverContinuation),
        Box::new(ReadHandler::new(true)),
    ];

    let hints: Vec<DispatchHint> = handlers.iter().map(|h| DispatchHint::of(h)).collect();
    let inline = if segue::CONSERVATIVE {
        DispatchHint::Defer
    } else {
        DispatchHint::MayInline
    };
    assert_eq!(
        hints,
        vec![DispatchHint::Defer, inline, DispatchHint::Defer, inline]
    );
}

// ============================================================================
// Untyped fallback
// ============================================================================

struct ThirdPartyCallback {
    _id: u32,
}

#[test]
fn test_macro_answers_for_types_without_impl() {
    let callback = ThirdPartyCallback { _id: 9 };
    assert!(!resolve_continuation!(callback));
    assert!(!resolve_continuation!(|| ()));
    assert_eq!(resolve_continuation!(AlwaysContinuation), expected(true));
    assert!(!resolve_continuation!(Plain));
}
