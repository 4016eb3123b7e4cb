//! Provide the recording stand-in handed to accessor closures.

use alloc::borrow::Cow;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::{AccessEvent, AccessKey, Symbol};

// -----------------------------------------------------------------------------
// Recorder

/// The private event log of a single trace.
pub(crate) struct Recorder {
    events: RefCell<Vec<AccessEvent>>,
    sealed: Cell<bool>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            sealed: Cell::new(false),
        }
    }

    fn record(&self, key: AccessKey) {
        if self.sealed.get() {
            log::debug!("ignoring access `{key}` made after the trace completed");
            return;
        }
        log::trace!("recorded access `{key}`");
        self.events.borrow_mut().push(AccessEvent::from(key));
    }

    /// Stops recording and hands out the events in the order they occurred.
    pub(crate) fn seal(&self) -> Vec<AccessEvent> {
        self.sealed.set(true);
        self.events.take()
    }
}

// -----------------------------------------------------------------------------
// Probe

/// The stand-in passed to an accessor closure.
///
/// Every read performed on a probe is recorded, and returns another probe
/// bound to the same recorder, so chained reads keep being observed.
/// Calls and constructions return a probe as well but record nothing:
/// `a.method().c` contributes `a`, `method` and `c`.
///
/// Probes are cheap to clone, every clone shares the recorder.
/// A probe is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```
/// use pathof_trace::{Symbol, TraceOptions, trace};
///
/// let tag = Symbol::new("tag");
///
/// // o.a.method().c?.[0][tag]
/// let path = trace(
///     |o| Some(o.field("a").field("method").call().field("c").optional()?.index(0).symbol(&tag)),
///     TraceOptions::new(),
/// )
/// .unwrap();
///
/// assert_eq!(path, "a.method.c[0].tag");
/// ```
#[derive(Clone)]
pub struct Probe {
    recorder: Rc<Recorder>,
}

impl Probe {
    #[inline]
    pub(crate) fn new(recorder: Rc<Recorder>) -> Self {
        Self { recorder }
    }

    /// Reads `key`, e.g. `x[key]`.
    #[inline]
    pub fn key(&self, key: impl Into<AccessKey>) -> Probe {
        self.recorder.record(key.into());
        self.clone()
    }

    /// Reads a named property, e.g. `x.name`.
    #[inline]
    pub fn field(&self, name: impl Into<Cow<'static, str>>) -> Probe {
        self.key(AccessKey::Name(name.into()))
    }

    /// Reads an index, e.g. `x[0]`.
    #[inline]
    pub fn index(&self, index: usize) -> Probe {
        self.key(AccessKey::Index(index))
    }

    /// Reads a symbol-keyed property, e.g. `x[sym]`.
    #[inline]
    pub fn symbol(&self, symbol: &Symbol) -> Probe {
        self.key(AccessKey::Symbol(symbol.clone()))
    }

    /// Calls the probe, e.g. `x()`. Records nothing.
    #[inline]
    pub fn call(&self) -> Probe {
        self.clone()
    }

    /// Calls the probe with arguments, e.g. `x(a, b)`. Records nothing.
    #[inline]
    pub fn call_with<A>(&self, _args: A) -> Probe {
        self.clone()
    }

    /// Constructs through the probe, e.g. `new x()`. Records nothing.
    #[inline]
    pub fn construct(&self) -> Probe {
        self.clone()
    }

    /// Constructs through the probe with arguments, e.g. `new x(a, b)`.
    /// Records nothing.
    #[inline]
    pub fn construct_with<A>(&self, _args: A) -> Probe {
        self.clone()
    }

    /// Optional chaining, e.g. `x?.`.
    ///
    /// A probe is never missing, so this is always `Some`
    /// and `?` never short-circuits the path.
    #[inline]
    pub fn optional(&self) -> Option<Probe> {
        Some(self.clone())
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe")
            .field("recorded", &self.recorder.events.borrow().len())
            .field("sealed", &self.recorder.sealed.get())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
