use tracing::{debug, trace};

use crate::{
    errors::errors::{ErrorImpl, LexError},
    Position, MK_COMPOUND, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP};

/// Pull-based scanner over a single piece of source text.
///
/// `current_char` is always the character at `pos`, or `None` once the
/// cursor has moved past the last character. `pos` never exceeds the
/// length of the source.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    current_char: Option<char>,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let source: Vec<char> = source.chars().collect();
        let current_char = source.first().copied();

        Lexer {
            source,
            pos: 0,
            current_char,
            line: 1,
            column: 1,
        }
    }

    /// Moves the cursor one character forward. Safe to call at end-of-input.
    pub fn advance(&mut self) {
        let Some(ch) = self.current_char else {
            return;
        };

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.pos += 1;
        self.current_char = self.source.get(self.pos).copied();
    }

    /// The character after the current one, without moving the cursor.
    pub fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn current(&self) -> Option<char> {
        self.current_char
    }

    pub fn at_eof(&self) -> bool {
        self.current_char.is_none()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if !ch.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Skips a `{ ... }` comment. Comments do not nest.
    pub fn skip_comment(&mut self) -> Result<(), LexError> {
        self.advance(); // eat '{'

        loop {
            match self.current_char {
                Some('}') => break,
                Some(_) => self.advance(),
                None => {
                    return Err(LexError::new(
                        ErrorImpl::UnterminatedComment,
                        None,
                        self.position(),
                    ))
                }
            }
        }

        self.advance(); // eat '}'
        Ok(())
    }

    fn take_digits(&mut self, into: &mut String) {
        while let Some(ch) = self.current_char {
            if !ch.is_ascii_digit() {
                break;
            }
            into.push(ch);
            self.advance();
        }
    }

    pub fn number(&mut self) -> Result<Token, LexError> {
        let start = self.position();
        let first = self.current_char;
        let mut result = String::new();

        self.take_digits(&mut result);

        // A '.' only belongs to the literal when a digit follows it
        if self.current_char == Some('.') && self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            result.push('.');
            self.advance();
            self.take_digits(&mut result);

            // Overflowing reals parse as infinity rather than failing
            let value = result
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| out_of_range(&result, first, start))?;

            return Ok(MK_TOKEN!(TokenKind::RealLiteral, Some(TokenValue::Real(value)), start));
        }

        let value = result
            .parse::<i64>()
            .map_err(|_| out_of_range(&result, first, start))?;

        Ok(MK_TOKEN!(TokenKind::IntegerLiteral, Some(TokenValue::Integer(value)), start))
    }

    /// Scans an identifier or reserved word. Keywords match exact upper-case
    /// spellings only, so `begin` is an identifier.
    pub fn identifier(&mut self) -> Token {
        let start = self.position();
        let mut result = String::new();

        while let Some(ch) = self.current_char {
            if !(ch.is_alphanumeric() || ch == '_') {
                break;
            }
            result.push(ch);
            self.advance();
        }

        let kind = RESERVED_LOOKUP
            .get(result.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, Some(TokenValue::Text(result)), start)
    }

    fn single(&mut self, kind: TokenKind, start: Position) -> Token {
        self.advance();
        MK_TOKEN!(kind, start)
    }

    fn operator(&mut self, ch: char) -> Result<Token, LexError> {
        let start = self.position();

        let token = match ch {
            '+' => self.single(TokenKind::Plus, start),
            '-' => self.single(TokenKind::Minus, start),
            '*' => self.single(TokenKind::Mul, start),
            '/' => self.single(TokenKind::FloatDiv, start),
            '(' => self.single(TokenKind::LParen, start),
            ')' => self.single(TokenKind::RParen, start),
            '}' => self.single(TokenKind::RBrace, start),
            ';' => self.single(TokenKind::Semi, start),
            '.' => self.single(TokenKind::Dot, start),
            ',' => self.single(TokenKind::Comma, start),
            '=' => self.single(TokenKind::Equal, start),
            ':' => MK_COMPOUND!(self, start, '=', TokenKind::Assign, TokenKind::Colon),
            '<' => MK_COMPOUND!(self, start, '=', TokenKind::LessEqual, TokenKind::Less),
            '>' => MK_COMPOUND!(self, start, '=', TokenKind::GreaterEqual, TokenKind::Greater),
            '!' => MK_COMPOUND!(self, start, '=', TokenKind::BangEqual, TokenKind::Bang),
            _ => {
                return Err(LexError::new(
                    ErrorImpl::UnrecognisedCharacter,
                    Some(ch),
                    start,
                ))
            }
        };

        Ok(token)
    }

    /// Returns the next token. Once the input is exhausted every call
    /// returns an `EndOfInput` token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            match self.current_char {
                None => return Ok(MK_TOKEN!(TokenKind::EndOfInput, self.position())),
                Some(ch) if ch.is_whitespace() => self.skip_whitespace(),
                Some('{') => self.skip_comment()?,
                Some(ch) if ch.is_ascii_digit() => return self.number(),
                Some(ch) if ch.is_alphabetic() || ch == '_' => return Ok(self.identifier()),
                Some(ch) => return self.operator(ch),
            }
        }
    }
}

fn out_of_range(literal: &str, first: Option<char>, start: Position) -> LexError {
    LexError::new(
        ErrorImpl::NumberOutOfRange { literal: literal.to_string() },
        first,
        start,
    )
}

/// Scans the whole source, including the trailing `EndOfInput` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    debug!("tokenizing {} bytes", source.len());

    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        trace!("{} at {}", token, token.position);

        let done = token.is_eof();
        tokens.push(token);

        if done {
            break;
        }
    }

    debug!("tokenized {} tokens", tokens.len());
    Ok(tokens)
}
