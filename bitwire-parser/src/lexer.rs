//! # Lexer for the bitwire circuit language
//!
//! One instruction per line, tokens separated by runs of whitespace. Gate
//! keywords are uppercase, wire names lowercase, so the two never collide.
//!
//! Token boundaries are whitespace boundaries: the catch-all [`Token::Unknown`]
//! outranks every shorter match, so a glued word like `ORy` lexes as one
//! unknown token instead of `OR` followed by `y`. The parser then rejects it
//! with the whole word as the offending token.

use logos::Logos;

/// Tokens for circuit source lines
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t]+")] // Skip whitespace
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Wiring arrow
    #[token("->")]
    Arrow,

    /// Complement gate keyword
    #[token("NOT")]
    Not,

    /// Conjunction gate keyword
    #[token("AND")]
    And,

    /// Disjunction gate keyword
    #[token("OR")]
    Or,

    /// Left-shift gate keyword
    #[token("LSHIFT")]
    Lshift,

    /// Right-shift gate keyword
    #[token("RSHIFT")]
    Rshift,

    /// Wire name (lowercase letters)
    #[regex(r"[a-z]+", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Decimal number
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Number(u64),

    /// Any other whitespace-delimited word. Lowest priority, but `\S+` spans
    /// the whole word, so it wins over any token matching only a prefix.
    #[regex(r"\S+", |lex| lex.slice().to_string(), priority = 0)]
    Unknown(String),
}

impl Token {
    /// Source text of the token, for diagnostics.
    pub fn text(&self) -> String {
        match self {
            Token::Arrow => "->".to_string(),
            Token::Not => "NOT".to_string(),
            Token::And => "AND".to_string(),
            Token::Or => "OR".to_string(),
            Token::Lshift => "LSHIFT".to_string(),
            Token::Rshift => "RSHIFT".to_string(),
            Token::Identifier(name) => name.clone(),
            Token::Number(value) => value.to_string(),
            Token::Unknown(word) => word.clone(),
        }
    }
}
