//! Procedural macros for the Segue handler framework.
//!
//! - `#[derive(IsContinuation)]` - declare a handler's continuation answer

use proc_macro::TokenStream;

mod continuation;

/// Derive macro for implementing `IsContinuation`.
///
/// # Attributes
///
/// - `#[continuation(always)]` on the type: always a continuation.
/// - `#[continuation(never)]` on the type: never a continuation.
/// - `#[continuation(forward)]` on a field: answer whatever that field
///   answers. On enums, one field per variant may be marked; unmarked
///   variants use the type-level answer.
///
/// Without attributes the type keeps the default answer (`false`).
///
/// # Example
///
/// ```rust,ignore
/// #[derive(IsContinuation)]
/// struct Bound<H> {
///     #[continuation(forward)]
///     handler: H,
///     bytes: usize,
/// }
/// ```
#[proc_macro_derive(IsContinuation, attributes(continuation))]
pub fn derive_is_continuation(input: TokenStream) -> TokenStream {
    continuation::derive_is_continuation_impl(input)
}
