use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// An error returned when a recorded path cannot be rendered.
///
/// The rendering either succeeds for the whole path or fails;
/// no partial path is ever produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TraceError {
    /// The path read a [`Symbol`](crate::Symbol) key while
    /// [`TraceOptions::stringify_symbols`](crate::TraceOptions::stringify_symbols)
    /// was disabled.
    #[error("Cannot print path which contains symbols (found `Symbol({})`)", .description.as_deref().unwrap_or(""))]
    SymbolNotAllowed { description: Option<String> },
}
