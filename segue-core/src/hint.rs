//! Scheduler-facing form of the continuation answer.

use crate::{continuation::IsContinuation, resolve::resolve_continuation};

/// What a scheduler is allowed to do with a freshly scheduled handler.
///
/// This is only the typed answer. Whether a `MayInline` handler actually runs
/// inline is up to the scheduler's own policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchHint {
    /// The handler continues the current operation and may run inline.
    MayInline,
    /// The handler is independent work and must be queued normally.
    Defer,
}

impl DispatchHint {
    /// Resolve the hint for a handler.
    #[inline]
    pub fn of<H: IsContinuation + ?Sized>(handler: &H) -> Self {
        Self::from(resolve_continuation(handler))
    }

    /// Returns `true` for [`DispatchHint::MayInline`].
    #[inline]
    pub const fn may_inline(self) -> bool {
        matches!(self, DispatchHint::MayInline)
    }
}

impl From<bool> for DispatchHint {
    #[inline]
    fn from(is_continuation: bool) -> Self {
        if is_continuation {
            DispatchHint::MayInline
        } else {
            DispatchHint::Defer
        }
    }
}

impl From<DispatchHint> for bool {
    #[inline]
    fn from(hint: DispatchHint) -> Self {
        hint.may_inline()
    }
}
