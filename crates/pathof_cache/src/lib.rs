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

mod cache;
mod hasher;

#[cfg(feature = "std")]
mod shared;

// -----------------------------------------------------------------------------
// Exports

pub use cache::PathCache;
pub use hasher::PathHashState;

#[cfg(feature = "std")]
pub use shared::SharedPathCache;
