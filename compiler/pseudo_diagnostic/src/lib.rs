//! Diagnostics for the pseudo-code engine.
//!
//! Every phase reports problems the same way:
//! - an error code for searchability (`E1007`)
//! - the 1-based source line where it went wrong
//! - a clear message (what went wrong)
//! - a suggestion (how to fix it), possibly empty
//! - a severity: errors block execution, warnings never do
//!
//! Diagnostics serialize with `serde` so a transport layer can hand them to a
//! client unchanged.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{has_errors, Diagnostic, Severity};
pub use error_code::ErrorCode;
