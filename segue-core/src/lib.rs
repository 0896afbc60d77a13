//! # segue-core
//!
//! Core traits for declaring whether a completion handler is a *continuation*.
//!
//! This crate has no dependencies and is designed to be imported by runtimes,
//! schedulers and handler libraries that only need the declaration mechanism.
//!
//! # Architecture
//!
//! ## Default Answer ([`default_is_continuation`])
//!
//! The universal fallback. Given any handler it answers `false`: nothing is a
//! continuation unless it says so.
//!
//! ## Customization Point ([`IsContinuation`])
//!
//! A handler type opts in with an `impl IsContinuation`. The provided method
//! returns the Default Answer, so an empty impl keeps the safe default and an
//! overriding impl declares the handler's own answer.
//!
//! ## Lookup Dispatcher ([`resolve_continuation`])
//!
//! The single entry point schedulers call. It resolves statically to the
//! handler type's override and cannot be shadowed by inherent methods or free
//! functions that happen to share the `is_continuation` name.
//!
//! ## Scheduler Interface ([`DispatchHint`])
//!
//! The typed form of the answer a scheduler consumes: `MayInline` or `Defer`.
//!
//! # Features
//!
//! - `conservative`: every query answers `false`, regardless of overrides.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod continuation;
mod hint;
mod resolve;

// Re-exports
pub use continuation::{IsContinuation, default_is_continuation};
pub use hint::DispatchHint;
pub use resolve::{CONSERVATIVE, resolve_continuation};

#[doc(hidden)]
pub mod __private {
    pub use crate::resolve::{Subject, ViaDefault, ViaOverride};
}
