//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_COMPOUND!` - Scans a one-or-two character operator such as `<` / `<=`
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's optional value
/// * `$position` - The source position of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntegerLiteral, Some(TokenValue::Integer(42)), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
    ($kind:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: None,
            position: $position,
        }
    };
}

/// Scans an operator that may be followed by a second character.
///
/// Consumes the current character, then consumes `$second` too if it comes
/// next, producing `$double`; otherwise produces `$single`.
///
/// # Example
///
/// ```ignore
/// '<' => MK_COMPOUND!(self, start, '=', TokenKind::LessEqual, TokenKind::Less),
/// ```
#[macro_export]
macro_rules! MK_COMPOUND {
    ($lexer:expr, $position:expr, $second:literal, $double:expr, $single:expr) => {{
        if $lexer.peek() == Some($second) {
            $lexer.advance();
            $lexer.advance();
            $crate::MK_TOKEN!($double, $position)
        } else {
            $lexer.advance();
            $crate::MK_TOKEN!($single, $position)
        }
    }};
}
