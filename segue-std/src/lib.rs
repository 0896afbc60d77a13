//! # segue-std
//!
//! Standard implementations for the Segue handler framework.
//!
//! This crate provides:
//! - **Wrappers**: [`Continuation`], [`Independent`], [`Traced`]
//! - **Type-indexed registry**: [`Registry`] for type-erased handlers
//! - **Testing utilities**: [`RecordingScheduler`], [`Fixed`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use segue_core;

// Modules
pub mod registry;
pub mod testing;
pub mod wrappers;

pub use registry::{Registry, RegistryBuilder, RegistryError};
pub use testing::{Fixed, RecordingScheduler};
pub use wrappers::{Continuation, Independent, Traced};

#[cfg(feature = "inventory")]
pub use inventory;
