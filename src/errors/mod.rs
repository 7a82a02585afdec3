//! Error types produced while scanning.
//!
//! Every failure is fatal to the current scan and carries:
//!
//! - The kind of failure (unrecognised character, unterminated comment,
//!   out-of-range numeric literal)
//! - The offending character, or end-of-input
//! - The line and column the scanner was at

pub mod errors;
