#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature enabled the usual `tracing` macros are
//! re-exported here and at the crate root. Without it, same-named no-op
//! macros are exported instead, so layout code can log unconditionally:
//!
//! ```
//! use trellis_core::{debug_span, trace};
//!
//! let span = debug_span!("split", segments = 3);
//! let _guard = span.enter();
//! trace!("done");
//! ```

#[cfg(feature = "tracing")]
pub use tracing::{debug_span, error, trace, warn};

// Without `tracing`, the macros swallow their arguments and spans become
// zero-sized placeholders.
#[cfg(not(feature = "tracing"))]
mod disabled {
    /// Expands to nothing.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// Expands to nothing.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    /// Expands to a [`NoopSpan`](crate::logging::NoopSpan).
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Stand-in for `tracing::Span` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Returned by [`NoopSpan::enter`].
#[cfg(not(feature = "tracing"))]
pub struct NoopGuard;

/// Install a global JSON subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` when `RUST_LOG` is unset or invalid. Returns `false`
/// if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
