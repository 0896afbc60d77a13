//! Type-indexed registry for type-erased handlers.
//!
//! Schedulers that store handlers as `dyn Any` lose the static type needed
//! for trait dispatch. The [`Registry`] keeps a `TypeId` to predicate map
//! instead, built once and then shared read-only. Types that were never
//! registered resolve to the Default Answer.
//!
//! With the `inventory` feature, entries can also be submitted from anywhere
//! in the program with [`submit_continuation!`] and collected at startup.
//!
//! [`submit_continuation!`]: crate::submit_continuation

use segue_core::{CONSERVATIVE, IsContinuation, default_is_continuation, resolve_continuation};
use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    fmt,
};
use thiserror::Error;

type Query = Box<dyn Fn(&dyn Any) -> bool + Send + Sync>;

struct Entry {
    type_name: &'static str,
    query: Query,
}

/// Errors that can occur while building a [`Registry`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An answer was already registered for this type.
    #[error("continuation answer already registered for type: {type_name}")]
    AlreadyRegistered {
        /// Name of the duplicated type.
        type_name: &'static str,
    },
}

/// A frozen map from handler type to its continuation answer.
pub struct Registry {
    entries: HashMap<TypeId, Entry>,
}

impl Registry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Resolve a type-erased handler.
    ///
    /// Looks up the handler's concrete type. Unregistered types, and every
    /// type in conservative mode, answer `false`.
    ///
    /// A `&Box<dyn Any>` coerces to `&dyn Any` as the box itself, not its
    /// contents. Boxed `dyn Any` (plain, `+ Send`, `+ Send + Sync`) is
    /// unwrapped and resolved by its contents unless the box type itself is
    /// registered. Other smart pointers must be dereferenced by the caller.
    pub fn resolve(&self, handler: &dyn Any) -> bool {
        if CONSERVATIVE {
            return default_is_continuation(handler);
        }
        if let Some(entry) = self.entries.get(&handler.type_id()) {
            return (entry.query)(handler);
        }
        if let Some(inner) = unbox(handler) {
            return self.resolve(inner);
        }
        default_is_continuation(handler)
    }

    /// Check whether an answer is registered for `H`.
    pub fn contains<H: Any>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<H>())
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.entries.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        f.debug_struct("Registry").field("types", &names).finish()
    }
}

/// Builder for constructing a [`Registry`].
pub struct RegistryBuilder {
    entries: HashMap<TypeId, Entry>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `H` with its own [`IsContinuation`] answer.
    pub fn register<H: IsContinuation + Any>(self) -> Result<Self, RegistryError> {
        self.insert(
            TypeId::of::<H>(),
            type_name::<H>(),
            Box::new(erased_query::<H>),
        )
    }

    /// Register `H` with an explicit predicate.
    ///
    /// Useful for types from other crates that do not implement
    /// [`IsContinuation`].
    pub fn register_with<H, F>(self, query: F) -> Result<Self, RegistryError>
    where
        H: Any,
        F: Fn(&H) -> bool + Send + Sync + 'static,
    {
        self.insert(
            TypeId::of::<H>(),
            type_name::<H>(),
            Box::new(move |handler: &dyn Any| handler.downcast_ref::<H>().is_some_and(&query)),
        )
    }

    /// Fold in every entry submitted with [`submit_continuation!`].
    ///
    /// [`submit_continuation!`]: crate::submit_continuation
    #[cfg(feature = "inventory")]
    pub fn with_collected(self) -> Result<Self, RegistryError> {
        let mut builder = self;
        for registration in inventory::iter::<ContinuationRegistration> {
            builder = builder.insert(
                (registration.type_id)(),
                (registration.type_name)(),
                Box::new(registration.query),
            )?;
        }
        Ok(builder)
    }

    /// Build the registry.
    pub fn build(self) -> Registry {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(types = self.entries.len(), "continuation registry built");
        }
        Registry {
            entries: self.entries,
        }
    }

    fn insert(
        mut self,
        type_id: TypeId,
        type_name: &'static str,
        query: Query,
    ) -> Result<Self, RegistryError> {
        if self.entries.contains_key(&type_id) {
            #[cfg(feature = "tracing")]
            {
                tracing::warn!(handler = type_name, "duplicate continuation registration");
            }
            return Err(RegistryError::AlreadyRegistered { type_name });
        }
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(handler = type_name, "registered continuation answer");
        }
        self.entries.insert(type_id, Entry { type_name, query });
        Ok(self)
    }
}

fn unbox(handler: &dyn Any) -> Option<&dyn Any> {
    if let Some(boxed) = handler.downcast_ref::<Box<dyn Any>>() {
        return Some(&**boxed);
    }
    if let Some(boxed) = handler.downcast_ref::<Box<dyn Any + Send>>() {
        return Some(&**boxed);
    }
    handler
        .downcast_ref::<Box<dyn Any + Send + Sync>>()
        .map(|boxed| &**boxed as &dyn Any)
}

fn erased_query<H: IsContinuation + Any>(handler: &dyn Any) -> bool {
    handler
        .downcast_ref::<H>()
        .is_some_and(|handler| resolve_continuation(handler))
}

/// Registration entry collected by `inventory`.
///
/// Create with [`ContinuationRegistration::of`], usually through
/// [`submit_continuation!`].
///
/// [`submit_continuation!`]: crate::submit_continuation
#[cfg(feature = "inventory")]
pub struct ContinuationRegistration {
    /// The handler's `TypeId`.
    pub type_id: fn() -> TypeId,
    /// The handler's type name, for diagnostics.
    pub type_name: fn() -> &'static str,
    /// Type-erased query.
    pub query: fn(&dyn Any) -> bool,
}

#[cfg(feature = "inventory")]
impl ContinuationRegistration {
    /// Entry answering with `H`'s own [`IsContinuation`] implementation.
    pub const fn of<H: IsContinuation + Any>() -> Self {
        Self {
            type_id: TypeId::of::<H>,
            type_name: type_name::<H>,
            query: erased_query::<H>,
        }
    }
}

#[cfg(feature = "inventory")]
inventory::collect!(ContinuationRegistration);

/// Submit handler types to the global registry collection.
///
/// # Example
/// ```ignore
/// struct ReadStep;
/// impl IsContinuation for ReadStep {
///     fn is_continuation(&self) -> bool { true }
/// }
///
/// submit_continuation!(ReadStep);
///
/// let registry = Registry::builder().with_collected()?.build();
/// ```
#[cfg(feature = "inventory")]
#[macro_export]
macro_rules! submit_continuation {
    ($($handler:ty),+ $(,)?) => {
        $(
            $crate::inventory::submit! {
                $crate::registry::ContinuationRegistration::of::<$handler>()
            }
        )+
    };
}
