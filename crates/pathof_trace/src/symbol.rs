use alloc::sync::Arc;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_SYMBOL_ID: AtomicUsize = AtomicUsize::new(0);

/// A unique, opaque key with an optional description.
///
/// Two symbols are equal only if one is a clone of the other;
/// creating two symbols with the same description yields two distinct keys.
/// When a path is rendered, a symbol segment prints its description.
///
/// # Examples
///
/// ```
/// use pathof_trace::{Symbol, TraceOptions, trace};
///
/// let my_symbol = Symbol::new("mySymbol");
/// assert_ne!(my_symbol, Symbol::new("mySymbol"));
///
/// let path = trace(|o| o.field("a").symbol(&my_symbol), TraceOptions::new()).unwrap();
/// assert_eq!(path, "a.mySymbol");
/// ```
#[derive(Clone)]
pub struct Symbol {
    id: usize,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Creates a new symbol with the given description.
    pub fn new(description: &str) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: Some(Arc::from(description)),
        }
    }

    /// Creates a new symbol without description.
    ///
    /// Rendered as an empty segment.
    pub fn anonymous() -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn identity_not_description() {
        let a = Symbol::new("key");
        let b = Symbol::new("key");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn description() {
        assert_eq!(Symbol::new("mySymbol").description(), Some("mySymbol"));
        assert_eq!(Symbol::new("").description(), Some(""));
        assert_eq!(Symbol::anonymous().description(), None);
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Symbol::new("mySymbol")), "Symbol(mySymbol)");
        assert_eq!(format!("{:?}", Symbol::anonymous()), "Symbol()");
    }
}
