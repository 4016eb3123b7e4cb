#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod event;
mod macros;
mod options;
mod probe;
mod symbol;
mod trace;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::TraceError;
pub use event::{AccessEvent, AccessKey, AccessKind, Segment};
pub use options::{ArrayIndexNotation, TraceOptions};
pub use probe::Probe;
pub use symbol::Symbol;
pub use trace::{AccessTrace, record, trace};
