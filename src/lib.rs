#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use pathof_cache as cache;
pub use pathof_trace as trace;

pub use pathof_trace::{ArrayIndexNotation, Probe, Symbol, TraceError, TraceOptions, path_of};
