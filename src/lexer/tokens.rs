use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("PROGRAM", TokenKind::Program);
        map.insert("INTEGER", TokenKind::Integer);
        map.insert("REAL", TokenKind::Real);
        map.insert("DIV", TokenKind::IntegerDiv);
        map.insert("VAR", TokenKind::Var);
        map.insert("PROCEDURE", TokenKind::Procedure);
        map.insert("BEGIN", TokenKind::Begin);
        map.insert("END", TokenKind::End);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,
    Identifier,
    IntegerLiteral,
    RealLiteral,

    Plus,
    Minus,
    Mul,
    FloatDiv, // /

    LParen,
    RParen,
    LBrace, // never produced, `{` opens a comment
    RBrace,

    Semi,
    Dot,
    Colon,
    Comma,
    Assign, // :=

    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Bang,
    Equal,
    BangEqual,

    // Reserved
    Program,
    Integer,
    Real,
    IntegerDiv, // DIV
    Var,
    Procedure,
    Begin,
    End,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "END_OF_INPUT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::RealLiteral => "REAL_LITERAL",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::FloatDiv => "FLOAT_DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semi => "SEMI",
            TokenKind::Dot => "DOT",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Bang => "BANG",
            TokenKind::Equal => "EQUAL",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Program => "PROGRAM",
            TokenKind::Integer => "INTEGER",
            TokenKind::Real => "REAL",
            TokenKind::IntegerDiv => "DIV",
            TokenKind::Var => "VAR",
            TokenKind::Procedure => "PROCEDURE",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
        }
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Real(value) => write!(f, "{:?}", value),
            TokenValue::Text(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "type: {} value: {}", self.kind, value),
            None => write!(f, "type: {} value: None", self.kind),
        }
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn debug(&self) {
        println!("{}", self);
    }
}
