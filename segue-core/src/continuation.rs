//! # Customization Point (IsContinuation)
//!
//! The protocol a handler type implements to declare whether it continues
//! the operation that scheduled it.
//!
//! # Opting In
//!
//! - **Default**: `impl IsContinuation for MyHandler {}` answers `false`.
//! - **Override**: implement `is_continuation` and return the handler's own
//!   answer. The handler is borrowed, so the answer may depend on its state.
//! - **Forwarding**: wrappers forward to the wrapped handler through
//!   [`resolve_continuation`].
//!
//! Smart pointers, references and `Option` forward to their pointee.
//!
//! [`resolve_continuation`]: crate::resolve_continuation

use std::{rc::Rc, sync::Arc};

/// The Default Answer: no handler is a continuation unless it declares so.
///
/// Total over every type, including unsized ones. This is the body of
/// [`IsContinuation::is_continuation`] when a type does not override it.
#[inline]
pub const fn default_is_continuation<T: ?Sized>(handler: &T) -> bool {
    let _ = handler;
    false
}

/// Declares whether a handler is a continuation of the operation that
/// scheduled it.
///
/// A scheduler that receives `true` may run the handler inline on the current
/// stack. On `false` it must queue the handler as independent work.
///
/// The trait is object safe, so `dyn IsContinuation` handlers resolve too.
///
/// # Example
///
/// ```rust
/// use segue_core::{IsContinuation, resolve_continuation};
///
/// struct ReadNext;
///
/// impl IsContinuation for ReadNext {
///     fn is_continuation(&self) -> bool {
///         true
///     }
/// }
///
/// struct Accept;
/// impl IsContinuation for Accept {}
///
/// assert_eq!(resolve_continuation(&ReadNext), !segue_core::CONSERVATIVE);
/// assert!(!resolve_continuation(&Accept));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare whether it is a continuation",
    label = "missing `IsContinuation` implementation",
    note = "Add `impl IsContinuation for {Self} {{}}` to keep the default answer, or derive it."
)]
pub trait IsContinuation {
    /// Returns `true` when this handler continues the current operation.
    #[inline]
    fn is_continuation(&self) -> bool {
        default_is_continuation(self)
    }
}

impl<H: IsContinuation + ?Sized> IsContinuation for &H {
    #[inline]
    fn is_continuation(&self) -> bool {
        H::is_continuation(*self)
    }
}

impl<H: IsContinuation + ?Sized> IsContinuation for &mut H {
    #[inline]
    fn is_continuation(&self) -> bool {
        H::is_continuation(&**self)
    }
}

impl<H: IsContinuation + ?Sized> IsContinuation for Box<H> {
    #[inline]
    fn is_continuation(&self) -> bool {
        H::is_continuation(self.as_ref())
    }
}

impl<H: IsContinuation + ?Sized> IsContinuation for Rc<H> {
    #[inline]
    fn is_continuation(&self) -> bool {
        H::is_continuation(self.as_ref())
    }
}

impl<H: IsContinuation + ?Sized> IsContinuation for Arc<H> {
    #[inline]
    fn is_continuation(&self) -> bool {
        H::is_continuation(self.as_ref())
    }
}

// An empty slot has no work to continue.
impl<H: IsContinuation> IsContinuation for Option<H> {
    #[inline]
    fn is_continuation(&self) -> bool {
        self.as_ref().is_some_and(H::is_continuation)
    }
}
