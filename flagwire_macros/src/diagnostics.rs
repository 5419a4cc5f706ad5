//! Structured synthesis-time diagnostics.
//!
//! Failures are carried as plain data through the pipeline so validation
//! stays a pure function; only the macro entry point turns one into a host
//! abort.

use proc_macro2::Span;
use proc_macro_error2::Level;

/// Domain prefix carried by every message this macro emits.
pub const DOMAIN: &str = "flagwire";

/// One synthesis-time diagnostic: domain-qualified message, case-derived
/// identifier, severity, and the source location it points at. No fix-its.
#[derive(Debug)]
pub struct Diagnostic {
    pub identifier: &'static str,
    pub message: String,
    pub level: Level,
    pub span: Span,
}

impl Diagnostic {
    /// The attached item is not the declaration shape synthesis understands.
    pub fn bad_target(span: Span) -> Self {
        Self {
            identifier: "bad_target",
            message: format!(
                "{DOMAIN}: #[flag_names] can only be applied to an inherent `impl` block of a bit-flag-set type"
            ),
            level: Level::Error,
            span,
        }
    }

    /// Register with the host sink and stop this expansion.
    pub fn abort(self) -> ! {
        proc_macro_error2::Diagnostic::spanned(self.span, self.level, self.message).abort()
    }
}
