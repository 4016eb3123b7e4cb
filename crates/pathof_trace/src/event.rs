//! Provide the recorded access events and their rendered segments.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt;

use crate::{ArrayIndexNotation, Symbol, TraceError, TraceOptions};

// -----------------------------------------------------------------------------
// AccessKey

/// The key of a single observed access.
///
/// # Examples
///
/// ```
/// use pathof_trace::{AccessKey, Symbol};
///
/// assert_eq!(AccessKey::from("name"), AccessKey::Name("name".into()));
/// assert_eq!(AccessKey::from(3), AccessKey::Index(3));
///
/// let sym = Symbol::new("tag");
/// assert_eq!(AccessKey::from(&sym), AccessKey::Symbol(sym.clone()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessKey {
    /// A named property read, e.g. `a` of `x.a`.
    ///
    /// Names made of decimal digits only (`"0"`) are rendered as indices.
    Name(Cow<'static, str>),
    /// An index read, e.g. `0` of `x[0]`.
    Index(usize),
    /// A symbol-keyed read, e.g. `sym` of `x[sym]`.
    Symbol(Symbol),
}

impl From<&'static str> for AccessKey {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::Name(Cow::Borrowed(value))
    }
}

impl From<String> for AccessKey {
    #[inline]
    fn from(value: String) -> Self {
        Self::Name(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for AccessKey {
    #[inline]
    fn from(value: Cow<'static, str>) -> Self {
        Self::Name(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {$(
        impl From<$ty> for AccessKey {
            /// Values that fit a `usize` are indices; anything else
            /// (negative numbers) is read as a property name.
            #[inline]
            fn from(value: $ty) -> Self {
                match usize::try_from(value) {
                    Ok(index) => Self::Index(index),
                    Err(_) => Self::Name(Cow::Owned(value.to_string())),
                }
            }
        }
    )*};
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<Symbol> for AccessKey {
    #[inline]
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<&Symbol> for AccessKey {
    #[inline]
    fn from(value: &Symbol) -> Self {
        Self::Symbol(value.clone())
    }
}

impl fmt::Display for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
            Self::Symbol(symbol) => fmt::Debug::fmt(symbol, f),
        }
    }
}

// -----------------------------------------------------------------------------
// AccessEvent

/// The kind of an [`AccessEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    Property,
    Index,
    Symbol,
}

/// One observed read during a trace.
///
/// Calls and constructions are observed by the [`Probe`](crate::Probe)
/// but never produce an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessEvent {
    key: AccessKey,
}

impl From<AccessKey> for AccessEvent {
    #[inline]
    fn from(key: AccessKey) -> Self {
        Self { key }
    }
}

impl AccessEvent {
    #[inline]
    pub fn key(&self) -> &AccessKey {
        &self.key
    }

    #[inline]
    pub fn into_key(self) -> AccessKey {
        self.key
    }

    #[inline]
    pub fn kind(&self) -> AccessKind {
        match self.key {
            AccessKey::Name(_) => AccessKind::Property,
            AccessKey::Index(_) => AccessKind::Index,
            AccessKey::Symbol(_) => AccessKind::Symbol,
        }
    }

    /// Renders this event as a single [`Segment`].
    ///
    /// Fails only for symbols when `stringify_symbols` is disabled.
    pub fn segment(&self, options: &TraceOptions) -> Result<Segment<'_>, TraceError> {
        let brackets = options.array_index_notation == ArrayIndexNotation::Brackets;

        let segment = match &self.key {
            AccessKey::Symbol(symbol) => {
                if !options.stringify_symbols {
                    log::debug!("rejecting path with {symbol:?}: symbols are not stringified");
                    return Err(TraceError::SymbolNotAllowed {
                        description: symbol.description().map(ToString::to_string),
                    });
                }
                Segment::Dotted(Cow::Borrowed(symbol.description().unwrap_or("")))
            }
            AccessKey::Index(index) if brackets => Segment::Bracketed(Cow::Owned(index.to_string())),
            AccessKey::Index(index) => Segment::Dotted(Cow::Owned(index.to_string())),
            AccessKey::Name(name) if brackets && is_array_index(name) => {
                Segment::Bracketed(Cow::Borrowed(name))
            }
            AccessKey::Name(name) => Segment::Dotted(Cow::Borrowed(name)),
        };

        Ok(segment)
    }
}

/// Whether `key` is a non-negative base-10 integer.
fn is_array_index(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

// -----------------------------------------------------------------------------
// Segment

/// The rendered form of one [`AccessEvent`].
///
/// # Examples
///
/// ```
/// use pathof_trace::Segment;
///
/// assert_eq!(Segment::Dotted("a".into()).to_string(), ".a");
/// assert_eq!(Segment::Bracketed("0".into()).to_string(), "[0]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// `.key`
    Dotted(Cow<'a, str>),
    /// `[key]`
    Bracketed(Cow<'a, str>),
}

impl Segment<'_> {
    /// Appends this segment to `path`.
    pub fn push_to(&self, path: &mut String) {
        match self {
            Self::Dotted(key) => {
                path.push('.');
                path.push_str(key);
            }
            Self::Bracketed(key) => {
                path.push('[');
                path.push_str(key);
                path.push(']');
            }
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dotted(key) => write!(f, ".{key}"),
            Self::Bracketed(key) => write!(f, "[{key}]"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
