//! # segue - Continuation Declarations for Completion Handlers
//!
//! When an asynchronous operation completes, its handler often schedules the
//! next piece of work straight away. A scheduler may run that follow-up inline
//! if it *continues* the operation, or must queue it as independent work if
//! it does not. `segue` is how a handler declares which one it is.
//!
//! ## Quick Start
//!
//! ```rust
//! use segue::{IsContinuation, resolve_continuation};
//!
//! // Opt in with the default answer: not a continuation.
//! struct Accept;
//! impl IsContinuation for Accept {}
//!
//! // Override: the next read of a composed operation continues it.
//! struct ReadNext;
//! impl IsContinuation for ReadNext {
//!     fn is_continuation(&self) -> bool {
//!         true
//!     }
//! }
//!
//! assert!(!resolve_continuation(&Accept));
//! assert_eq!(resolve_continuation(&ReadNext), !segue::CONSERVATIVE);
//! ```
//!
//! ## Features
//!
//! - `macros`: `#[derive(IsContinuation)]`
//! - `tracing`: log answers from [`Traced`] and registry building
//! - `inventory`: collect registry entries with `submit_continuation!`
//! - `conservative`: treat every handler as independent work

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use segue_core::{
    CONSERVATIVE,
    // Scheduler interface
    DispatchHint,
    // Customization point
    IsContinuation,
    default_is_continuation,
    // Lookup dispatcher (function and macro)
    resolve_continuation,
};

// Wrappers
pub use segue_std::wrappers::{Continuation, Independent, Traced};

// Type-indexed registry
pub use segue_std::registry::{Registry, RegistryBuilder, RegistryError};

#[cfg(feature = "inventory")]
pub use segue_std::{inventory, registry::ContinuationRegistration, submit_continuation};

/// Handler wrappers.
pub mod wrappers {
    pub use segue_std::wrappers::{Continuation, Independent, Traced};
}

/// Type-indexed registry for type-erased handlers.
pub mod registry {
    #[cfg(feature = "inventory")]
    pub use segue_std::registry::ContinuationRegistration;
    pub use segue_std::registry::{Registry, RegistryBuilder, RegistryError};
}

/// Testing utilities.
pub mod testing {
    pub use segue_std::testing::{Fixed, RecordingScheduler};
}

/// Prelude module - common imports for Segue.
///
/// # Usage
///
/// ```rust,ignore
/// use segue::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Continuation, DispatchHint, Independent, IsContinuation, Traced, resolve_continuation,
    };
}

#[cfg(feature = "macros")]
pub use segue_macros::IsContinuation;
