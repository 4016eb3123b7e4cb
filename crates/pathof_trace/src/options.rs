//! Provide [`TraceOptions`], the rendering configuration of a traced path.

// -----------------------------------------------------------------------------
// ArrayIndexNotation

/// How an array index segment is rendered.
///
/// # Examples
///
/// ```
/// use pathof_trace::{ArrayIndexNotation, TraceOptions, trace};
///
/// let dot = TraceOptions::new().with_array_index_notation(ArrayIndexNotation::Dot);
/// assert_eq!(trace(|o| o.field("a").index(0).field("b"), dot).unwrap(), "a.0.b");
///
/// let brackets = TraceOptions::new().with_array_index_notation(ArrayIndexNotation::Brackets);
/// assert_eq!(trace(|o| o.field("a").index(0).field("b"), brackets).unwrap(), "a[0].b");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ArrayIndexNotation {
    /// `a.0`
    Dot,
    /// `a[0]`
    #[default]
    Brackets,
}

// -----------------------------------------------------------------------------
// TraceOptions

/// Options controlling how recorded accesses are rendered.
///
/// With the `serde` feature, the fields use camelCase names and
/// every field may be omitted:
///
/// ```json
/// { "arrayIndexNotation": "dot", "stringifySymbols": false, "finalSegmentOnly": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TraceOptions {
    /// Default: [`ArrayIndexNotation::Brackets`].
    pub array_index_notation: ArrayIndexNotation,
    /// Render symbols as their description.
    /// When `false`, a path that reads a symbol fails with
    /// [`TraceError::SymbolNotAllowed`](crate::TraceError::SymbolNotAllowed).
    ///
    /// Default: `true`.
    pub stringify_symbols: bool,
    /// Output only the last recorded segment, like C#'s `nameof`.
    ///
    /// Default: `false`.
    pub final_segment_only: bool,
}

impl Default for TraceOptions {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TraceOptions {
    /// Creates the default options.
    #[inline]
    pub const fn new() -> Self {
        Self {
            array_index_notation: ArrayIndexNotation::Brackets,
            stringify_symbols: true,
            final_segment_only: false,
        }
    }

    #[inline]
    pub const fn with_array_index_notation(mut self, notation: ArrayIndexNotation) -> Self {
        self.array_index_notation = notation;
        self
    }

    #[inline]
    pub const fn with_stringify_symbols(mut self, stringify_symbols: bool) -> Self {
        self.stringify_symbols = stringify_symbols;
        self
    }

    #[inline]
    pub const fn with_final_segment_only(mut self, final_segment_only: bool) -> Self {
        self.final_segment_only = final_segment_only;
        self
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = TraceOptions::default();
        assert_eq!(options.array_index_notation, ArrayIndexNotation::Brackets);
        assert!(options.stringify_symbols);
        assert!(!options.final_segment_only);
        assert_eq!(options, TraceOptions::new());
    }

    #[test]
    fn builder() {
        let options = TraceOptions::new()
            .with_array_index_notation(ArrayIndexNotation::Dot)
            .with_stringify_symbols(false)
            .with_final_segment_only(true);

        assert_eq!(options.array_index_notation, ArrayIndexNotation::Dot);
        assert!(!options.stringify_symbols);
        assert!(options.final_segment_only);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_camel_case() {
        let options: TraceOptions =
            serde_json::from_str(r#"{ "arrayIndexNotation": "dot", "finalSegmentOnly": true }"#)
                .unwrap();

        assert_eq!(options.array_index_notation, ArrayIndexNotation::Dot);
        assert!(options.stringify_symbols);
        assert!(options.final_segment_only);

        let options: TraceOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TraceOptions::new());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_camel_case() {
        let json = serde_json::to_string(&TraceOptions::new()).unwrap();
        assert_eq!(
            json,
            r#"{"arrayIndexNotation":"brackets","stringifySymbols":true,"finalSegmentOnly":false}"#
        );
    }
}
