#![forbid(unsafe_code)]

//! Logging macros for widget code.
//!
//! With the `tracing` feature the macros are tracing's own. Without it, the
//! crate root exports stand-ins with the same names and field syntax
//! (`key = value`, `key = %value`, `key = ?value`, bare `key`, trailing
//! message). The stand-ins type-check their field expressions inside a dead
//! branch, so a value that is only logged still counts as used, and nothing
//! runs at runtime.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, warn};

/// Field list muncher shared by the stand-in macros.
#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __noop_fields {
    () => {};
    ($name:ident = % $val:expr $(, $($rest:tt)*)?) => {
        let _ = &$val;
        $($crate::__noop_fields!($($rest)*);)?
    };
    ($name:ident = ? $val:expr $(, $($rest:tt)*)?) => {
        let _ = &$val;
        $($crate::__noop_fields!($($rest)*);)?
    };
    ($name:ident = $val:expr $(, $($rest:tt)*)?) => {
        let _ = &$val;
        $($crate::__noop_fields!($($rest)*);)?
    };
    ($name:ident $(, $($rest:tt)*)?) => {
        let _ = &$name;
        $($crate::__noop_fields!($($rest)*);)?
    };
    ($msg:literal $(, $($arg:tt)*)?) => {
        let _ = ::core::format_args!($msg $(, $($arg)*)?);
    };
}

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Stand-in for `tracing::debug!`.
    #[macro_export]
    macro_rules! debug {
        ($($field:tt)*) => {
            if false {
                $crate::__noop_fields!($($field)*);
            }
        };
    }

    /// Stand-in for `tracing::trace!`.
    #[macro_export]
    macro_rules! trace {
        ($($field:tt)*) => {
            if false {
                $crate::__noop_fields!($($field)*);
            }
        };
    }

    /// Stand-in for `tracing::warn!`.
    #[macro_export]
    macro_rules! warn {
        ($($field:tt)*) => {
            if false {
                $crate::__noop_fields!($($field)*);
            }
        };
    }

    /// Stand-in for `tracing::debug_span!`; evaluates to a [`NoopSpan`].
    ///
    /// [`NoopSpan`]: crate::logging::NoopSpan
    #[macro_export]
    macro_rules! debug_span {
        ($name:literal $(, $($field:tt)*)?) => {{
            if false {
                $($crate::__noop_fields!($($field)*);)?
            }
            $crate::logging::NoopSpan
        }};
    }
}

/// Span returned by the `debug_span!` stand-in.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `tracing::Span::entered`.
    pub fn entered(self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard returned by [`NoopSpan::entered`].
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    use std::cell::Cell;

    #[test]
    #[deny(unused_variables)]
    fn logged_only_values_count_as_used() {
        let label = "Florida";
        let visible = 3usize;
        let err = std::fmt::Error;
        crate::debug!(label, "refiltered");
        crate::trace!(visible = visible, "refiltered");
        crate::warn!(error = %err, reason = ?err, "rejected; using {}", "defaults");
        crate::debug!("closed");
        let _guard = crate::debug_span!("combobox_event", id = label, open = true).entered();
    }

    #[test]
    fn field_expressions_never_run() {
        let calls = Cell::new(0);
        let bump = || {
            calls.set(calls.get() + 1);
            calls.get()
        };
        crate::debug!(n = bump(), "never");
        crate::warn!(n = %bump());
        let _span = crate::debug_span!("span", n = bump());
        assert_eq!(calls.get(), 0);
    }
}
