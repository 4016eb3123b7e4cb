//! Provide the entry points: [`trace`], [`record`] and [`AccessTrace`].

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::slice;

use crate::probe::{Probe, Recorder};
use crate::{AccessEvent, Segment, TraceError, TraceOptions};

// -----------------------------------------------------------------------------
// AccessTrace

/// The accesses observed during one execution of an accessor, in order.
///
/// Produced by [`record`]; can be rendered any number of times,
/// under any [`TraceOptions`].
///
/// # Examples
///
/// ```
/// use pathof_trace::{ArrayIndexNotation, TraceOptions, record};
///
/// let recorded = record(|o| o.field("list").index(0));
/// assert_eq!(recorded.len(), 2);
///
/// assert_eq!(recorded.render(&TraceOptions::new()).unwrap(), "list[0]");
///
/// let dot = TraceOptions::new().with_array_index_notation(ArrayIndexNotation::Dot);
/// assert_eq!(recorded.render(&dot).unwrap(), "list.0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AccessTrace {
    events: Vec<AccessEvent>,
}

impl AccessTrace {
    #[inline]
    pub fn events(&self) -> &[AccessEvent] {
        &self.events
    }

    #[inline]
    pub fn into_events(self) -> Vec<AccessEvent> {
        self.events
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Renders every event as a [`Segment`].
    ///
    /// Fails on the first symbol if symbols are not stringified.
    pub fn segments(&self, options: &TraceOptions) -> Result<Vec<Segment<'_>>, TraceError> {
        self.events.iter().map(|event| event.segment(options)).collect()
    }

    /// Renders the path string.
    ///
    /// Segments are joined in the order they were recorded, or only the last
    /// one is kept with `final_segment_only`. A single leading `.` is stripped.
    pub fn render(&self, options: &TraceOptions) -> Result<String, TraceError> {
        let segments = self.segments(options)?;

        let selected = if options.final_segment_only {
            segments.last().map(slice::from_ref).unwrap_or_default()
        } else {
            &segments[..]
        };

        let mut path = String::new();
        for segment in selected {
            segment.push_to(&mut path);
        }

        if path.starts_with('.') {
            path.remove(0);
        }

        Ok(path)
    }
}

impl From<Vec<AccessEvent>> for AccessTrace {
    #[inline]
    fn from(events: Vec<AccessEvent>) -> Self {
        Self { events }
    }
}

// -----------------------------------------------------------------------------
// Entry points

/// Runs `accessor` against a fresh [`Probe`] and returns the observed accesses.
///
/// Recording stops as soon as `accessor` returns. Its return value is dropped
/// afterwards, so a returned future that is never polled, or a probe stashed
/// for later, contributes nothing.
pub fn record<F, R>(accessor: F) -> AccessTrace
where
    F: FnOnce(Probe) -> R,
{
    let recorder = Rc::new(Recorder::new());

    let output = accessor(Probe::new(Rc::clone(&recorder)));
    let events = recorder.seal();
    drop(output);

    AccessTrace { events }
}

/// Returns the string representation of the path read by `accessor`.
///
/// - Properties render as their name: `a.b.c`.
/// - Indices render as `a[0]` or `a.0`, see
///   [`ArrayIndexNotation`](crate::ArrayIndexNotation).
/// - Symbols render as their description.
/// - Calls and constructions are transparent: `a.method().c` is `a.method.c`.
///
/// An accessor that reads nothing yields an empty string.
///
/// # Errors
///
/// [`TraceError::SymbolNotAllowed`] if the path contains a symbol and
/// `stringify_symbols` is disabled.
///
/// # Examples
///
/// ```
/// use pathof_trace::{TraceOptions, trace};
///
/// let path = trace(|o| o.field("a").field("b").optional()?.field("c").optional()?.index(0).optional(), TraceOptions::new());
/// assert_eq!(path.unwrap(), "a.b.c[0]");
///
/// let name = trace(|o| o.field("a").field("b").field("c"), TraceOptions::new().with_final_segment_only(true));
/// assert_eq!(name.unwrap(), "c");
/// ```
pub fn trace<F, R>(accessor: F, options: TraceOptions) -> Result<String, TraceError>
where
    F: FnOnce(Probe) -> R,
{
    record(accessor).render(&options)
}

// -----------------------------------------------------------------------------
// Tests
