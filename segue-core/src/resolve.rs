//! Lookup dispatcher.
//!
//! Calls to `is_continuation` must be made from a scope that does not contain
//! anything else of that name. This module exists for that purpose: it only
//! defines the resolution entry points, and it names the trait method with
//! fully-qualified syntax so inherent methods on the handler cannot win.

use crate::continuation::{IsContinuation, default_is_continuation};

/// `true` when the crate was built with the `conservative` feature.
///
/// In conservative mode every handler is treated as independent work.
pub const CONSERVATIVE: bool = cfg!(feature = "conservative");

/// Resolves whether `handler` is a continuation.
///
/// Dispatches statically to the handler type's [`IsContinuation`] override,
/// or to [`default_is_continuation`] when the type keeps the provided method.
/// The handler is only borrowed; the call never allocates, blocks or fails.
///
/// With the `conservative` feature this always returns `false`.
///
/// # Example
///
/// ```rust
/// use segue_core::{IsContinuation, resolve_continuation};
///
/// struct Flush {
///     chained: bool,
/// }
///
/// impl IsContinuation for Flush {
///     fn is_continuation(&self) -> bool {
///         self.chained
///     }
/// }
///
/// assert!(!resolve_continuation(&Flush { chained: false }));
/// assert_eq!(
///     resolve_continuation(&Flush { chained: true }),
///     !segue_core::CONSERVATIVE
/// );
/// ```
#[inline]
pub fn resolve_continuation<H: IsContinuation + ?Sized>(handler: &H) -> bool {
    if CONSERVATIVE {
        return default_is_continuation(handler);
    }
    <H as IsContinuation>::is_continuation(handler)
}

/// Borrowed handler under resolution by [`resolve_continuation!`].
#[doc(hidden)]
pub struct Subject<'a, T: ?Sized>(pub &'a T);

/// Preferred candidate: the handler type implements [`IsContinuation`].
#[doc(hidden)]
pub trait ViaOverride {
    /// Resolve through the handler's own implementation.
    fn __segue_resolve(&self) -> bool;
}

impl<T: IsContinuation + ?Sized> ViaOverride for Subject<'_, T> {
    #[inline]
    fn __segue_resolve(&self) -> bool {
        resolve_continuation(self.0)
    }
}

/// Fallback candidate, one autoref further away than [`ViaOverride`].
#[doc(hidden)]
pub trait ViaDefault {
    /// Resolve to the Default Answer.
    fn __segue_resolve(&self) -> bool;
}

impl<T: ?Sized> ViaDefault for &Subject<'_, T> {
    #[inline]
    fn __segue_resolve(&self) -> bool {
        default_is_continuation(self.0)
    }
}

/// Resolves whether a handler expression is a continuation, even when its
/// type never implemented [`IsContinuation`].
///
/// Types with an implementation get their override; every other type gets
/// the Default Answer (`false`). Selection happens at compile time through
/// method resolution order, so this only works where the concrete type is
/// known. Generic code should bound on `IsContinuation` and call
/// [`resolve_continuation()`] instead.
///
/// The expression is borrowed, not moved.
///
/// # Example
///
/// ```rust
/// use segue_core::{IsContinuation, resolve_continuation};
///
/// struct Untouched;
///
/// struct Chained;
/// impl IsContinuation for Chained {
///     fn is_continuation(&self) -> bool {
///         true
///     }
/// }
///
/// let handler = Untouched;
/// assert!(!resolve_continuation!(handler));
/// assert_eq!(resolve_continuation!(Chained), !segue_core::CONSERVATIVE);
/// ```
#[macro_export]
macro_rules! resolve_continuation {
    ($handler:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::__private::{ViaDefault as _, ViaOverride as _};
        (&$crate::__private::Subject(&$handler)).__segue_resolve()
    }};
}
