/// Traces a path written in access syntax.
///
/// The path starts at the root and uses:
///
/// - `.name`: property read
/// - `.0`, `[expr]`: key read, anything convertible into an
///   [`AccessKey`](crate::AccessKey) (indices, `&Symbol`, string names)
/// - `?`: optional chaining, ignored
/// - `(args)`: call, records nothing
///
/// An optional [`TraceOptions`](crate::TraceOptions) expression can be given
/// before the path, separated by `;`.
///
/// Expands to a [`trace`](crate::trace) call returning
/// `Result<String, TraceError>`.
///
/// # Examples
///
/// ```
/// use pathof_trace::{ArrayIndexNotation, Symbol, TraceOptions, path_of};
///
/// assert_eq!(path_of!(.a.b?.c[0].d).unwrap(), "a.b.c[0].d");
/// assert_eq!(path_of!(.a.method().c?.d).unwrap(), "a.method.c.d");
///
/// let tag = Symbol::new("tag");
/// let dot = TraceOptions::new().with_array_index_notation(ArrayIndexNotation::Dot);
/// assert_eq!(path_of!(dot; .list[1][&tag]).unwrap(), "list.1.tag");
/// ```
#[macro_export]
macro_rules! path_of {
    (. $($path:tt)*) => {
        $crate::path_of!($crate::TraceOptions::new(); . $($path)*)
    };
    ([ $($key:tt)* ] $($path:tt)*) => {
        $crate::path_of!($crate::TraceOptions::new(); [ $($key)* ] $($path)*)
    };
    ($options:expr; $($path:tt)*) => {
        $crate::trace(
            |__probe: $crate::Probe| $crate::__probe_path!(__probe; $($path)*),
            $options,
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __probe_path {
    ($probe:expr;) => {
        $probe
    };
    ($probe:expr; ? $($rest:tt)*) => {
        $crate::__probe_path!($probe; $($rest)*)
    };
    ($probe:expr; . $name:ident $($rest:tt)*) => {
        $crate::__probe_path!($probe.field(::core::stringify!($name)); $($rest)*)
    };
    ($probe:expr; . $key:literal $($rest:tt)*) => {
        $crate::__probe_path!($probe.key($key); $($rest)*)
    };
    ($probe:expr; [ $key:expr ] $($rest:tt)*) => {
        $crate::__probe_path!($probe.key($key); $($rest)*)
    };
    ($probe:expr; ( $($args:tt)* ) $($rest:tt)*) => {
        $crate::__probe_path!($probe.call(); $($rest)*)
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::{ArrayIndexNotation, Symbol, TraceError, TraceOptions};

    #[test]
    fn properties() {
        assert_eq!(path_of!(.name).unwrap(), "name");
        assert_eq!(path_of!(.level1.level2.level3).unwrap(), "level1.level2.level3");
    }

    #[test]
    fn optional_chaining() {
        assert_eq!(path_of!(.a?.b).unwrap(), path_of!(.a.b).unwrap());
        assert_eq!(path_of!(.a.b?.c?.d).unwrap(), "a.b.c.d");
    }

    #[test]
    fn indices() {
        let dot = TraceOptions::new().with_array_index_notation(ArrayIndexNotation::Dot);

        assert_eq!(path_of!([0]).unwrap(), "[0]");
        assert_eq!(path_of!(dot; [0]).unwrap(), "0");
        assert_eq!(path_of!(.list[0]).unwrap(), "list[0]");
        assert_eq!(path_of!(dot; .list[0]).unwrap(), "list.0");
        assert_eq!(path_of!(.pair.1).unwrap(), "pair[1]");

        let i = 4usize;
        assert_eq!(path_of!(.list[i + 1]).unwrap(), "list[5]");
    }

    #[test]
    fn string_and_symbol_keys() {
        let sym = Symbol::new("mySymbol");
        let name = String::from("dynamic");

        assert_eq!(path_of!(.a["b"]).unwrap(), "a.b");
        assert_eq!(path_of!(.a[name]).unwrap(), "a.dynamic");
        assert_eq!(path_of!([&sym]).unwrap(), "mySymbol");

        let denied = TraceOptions::new().with_stringify_symbols(false);
        assert_eq!(
            path_of!(denied; .a[&sym]),
            Err(TraceError::SymbolNotAllowed {
                description: Some("mySymbol".into())
            })
        );
    }

    #[test]
    fn calls() {
        assert_eq!(path_of!(.a.method().c?.d).unwrap(), "a.method.c.d");
        assert_eq!(path_of!(.a(None::<()>).e).unwrap(), "a.e");
    }

    #[test]
    fn mixed() {
        let symbol1 = Symbol::new("symbol1");
        let symbol2 = Symbol::new("symbol2");
        let dot = TraceOptions::new().with_array_index_notation(ArrayIndexNotation::Dot);

        assert_eq!(
            path_of!(.a.b?.c?[1].d?.e[&symbol1][1].f[&symbol2]).unwrap(),
            "a.b.c[1].d.e.symbol1[1].f.symbol2"
        );
        assert_eq!(
            path_of!(dot; .a.b?.c?[1].d?.e[&symbol1][1].f[&symbol2]).unwrap(),
            "a.b.c.1.d.e.symbol1.1.f.symbol2"
        );
    }

    #[test]
    fn final_segment() {
        let last = TraceOptions::new().with_final_segment_only(true);
        assert_eq!(path_of!(last; .a.b.c).unwrap(), "c");
        assert_eq!(path_of!(last;).unwrap(), "");
    }
}
