//! Structural self-checks for history containers.

use crate::history_error::HistoryError;

/// Trait for validating history graph invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);

    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), HistoryError>;

    /// Non-panicking check for release pipelines: logs the first violation at
    /// `warn` level and reports whether the container is sound.
    fn invariants_hold(&self) -> bool {
        match self.validate_invariants() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("history invariant violated: {e}");
                false
            }
        }
    }
}

/// Run a fallible check and panic with context when invariant checking is
/// compiled in (`debug_assertions`, `strict-invariants` or `check-invariants`).
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[history invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
