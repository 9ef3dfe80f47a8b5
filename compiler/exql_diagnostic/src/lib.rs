//! Diagnostics for the EXQL front-end.
//!
//! Lex and parse failures share one error type, [`SyntaxError`]:
//! - WHAT: `kind` describing what went wrong
//! - WHERE: the byte `offset` and the offending `token` text
//! - CONTEXT: a [`Snippet`] window of up to 20 bytes either side of the
//!   offset, with a caret column pointing into it
//!
//! Runtime errors live in `exql_value` and carry a message only.

mod snippet;
mod syntax_error;

pub use snippet::{Snippet, CONTEXT_RADIUS};
pub use syntax_error::{SyntaxError, SyntaxErrorKind};
