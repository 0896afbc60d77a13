//! Handler wrappers that fix or observe the continuation answer.
//!
//! A runtime that schedules the next step of a composed operation from inside
//! a completion wraps it in [`Continuation`]. Work that must never run inline
//! goes in [`Independent`]. [`Traced`] leaves the answer alone and logs it.

use segue_core::{IsContinuation, resolve_continuation};

/// Declares the wrapped handler a continuation, whatever it says itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Continuation<H> {
    inner: H,
}

impl<H> Continuation<H> {
    /// Wrap a handler.
    pub const fn new(inner: H) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped handler.
    pub fn get_ref(&self) -> &H {
        &self.inner
    }

    /// Unwrap the handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H> IsContinuation for Continuation<H> {
    #[inline]
    fn is_continuation(&self) -> bool {
        true
    }
}

/// Declares the wrapped handler independent work, whatever it says itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Independent<H> {
    inner: H,
}

impl<H> Independent<H> {
    /// Wrap a handler.
    pub const fn new(inner: H) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped handler.
    pub fn get_ref(&self) -> &H {
        &self.inner
    }

    /// Unwrap the handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H> IsContinuation for Independent<H> {
    #[inline]
    fn is_continuation(&self) -> bool {
        false
    }
}

/// Forwards to the wrapped handler and records the answer as a `tracing`
/// event (with the `tracing` feature).
#[derive(Debug)]
pub struct Traced<H> {
    inner: H,
    name: &'static str,
}

impl<H> Traced<H> {
    /// Wrap a handler under the given name.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The name reported with each answer.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Borrow the wrapped handler.
    pub fn get_ref(&self) -> &H {
        &self.inner
    }

    /// Unwrap the handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: Clone> Clone for Traced<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<H: Copy> Copy for Traced<H> {}

impl<H: IsContinuation> IsContinuation for Traced<H> {
    fn is_continuation(&self) -> bool {
        let answer = resolve_continuation(&self.inner);
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(handler = %self.name, is_continuation = answer, "resolved handler");
        }
        answer
    }
}
