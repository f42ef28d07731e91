//! Circuit line parser
//!
//! The first two tokens of a line decide its shape: a leading `NOT` means a
//! complement gate; otherwise the second token is an arrow (plain input or
//! relay), a binary gate keyword, or a shift keyword. Remaining tokens are
//! then consumed in fixed positions for that shape.

use crate::error::{ParseError, Result};
use crate::lexer::Token;
use bitwire_spec::{BinaryOp, Expression, Instruction, ShiftOp, Signal, WireId, MAX_SHIFT};
use logos::Logos;

/// Parse a single source line into an instruction.
///
/// `line_number` is 1-based and is carried into any error. Blank and
/// comment-only lines are an error here; [`crate::parse_circuit`] skips them
/// before calling.
pub fn parse_line(line: &str, line_number: usize) -> Result<Instruction> {
    let tokens = lex_line(line, line_number)?;
    let mut cursor = Cursor::new(tokens, line_number);

    // Two-token lookahead decides the shape
    let lookahead = (cursor.peek(0).cloned(), cursor.peek(1).cloned());
    let instruction = match lookahead {
        (None, _) => {
            return Err(ParseError::UnexpectedEnd {
                line: line_number,
                expected: "an instruction",
            })
        }
        (Some(Token::Not), _) => cursor.parse_not()?,
        (Some(first), Some(Token::Arrow)) => {
            if matches!(first, Token::Number(_)) {
                cursor.parse_const()?
            } else {
                cursor.parse_relay()?
            }
        }
        (Some(first), Some(Token::And | Token::Or)) => {
            if matches!(first, Token::Number(_)) {
                cursor.parse_binary_imm()?
            } else {
                cursor.parse_binary()?
            }
        }
        (Some(_), Some(Token::Lshift | Token::Rshift)) => cursor.parse_shift()?,
        (Some(_), Some(second)) => {
            return Err(ParseError::UnexpectedSecondToken {
                line: line_number,
                token: second.text(),
            })
        }
        (Some(_), None) => {
            return Err(ParseError::UnexpectedEnd {
                line: line_number,
                expected: "`->` or a gate keyword",
            })
        }
    };

    cursor.finish()?;
    Ok(instruction)
}

fn lex_line(line: &str, line_number: usize) -> Result<Vec<Token>> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(ParseError::UnexpectedToken {
                    line: line_number,
                    token: lexer.slice().to_string(),
                })
            }
        }
    }
    Ok(tokens)
}

/// Token stream over one line, with fixed-position expectation helpers.
struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
    line: usize,
}

impl Cursor {
    fn new(tokens: Vec<Token>, line: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            line,
        }
    }

    fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    fn next(&mut self, expected: &'static str) -> Result<Token> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(ParseError::UnexpectedEnd {
                line: self.line,
                expected,
            })?;
        self.pos += 1;
        Ok(token)
    }

    fn expect_identifier(&mut self) -> Result<WireId> {
        match self.next("a wire name")? {
            Token::Identifier(name) => {
                WireId::new(&name).map_err(|_| ParseError::ExpectedIdentifier {
                    line: self.line,
                    token: name,
                })
            }
            other => Err(ParseError::ExpectedIdentifier {
                line: self.line,
                token: other.text(),
            }),
        }
    }

    fn expect_literal(&mut self) -> Result<Signal> {
        match self.next("a 16-bit literal")? {
            Token::Number(value) => {
                Signal::try_from(value).map_err(|_| ParseError::LiteralOutOfRange {
                    line: self.line,
                    value,
                })
            }
            other => Err(ParseError::ExpectedLiteral {
                line: self.line,
                token: other.text(),
            }),
        }
    }

    fn expect_shift_amount(&mut self) -> Result<u8> {
        match self.next("a shift amount")? {
            Token::Number(amount) if amount <= MAX_SHIFT as u64 => Ok(amount as u8),
            Token::Number(amount) => Err(ParseError::ShiftOutOfRange {
                line: self.line,
                amount,
            }),
            other => Err(ParseError::ExpectedLiteral {
                line: self.line,
                token: other.text(),
            }),
        }
    }

    fn expect_arrow(&mut self) -> Result<()> {
        match self.next("`->`")? {
            Token::Arrow => Ok(()),
            other => Err(ParseError::UnexpectedToken {
                line: self.line,
                token: other.text(),
            }),
        }
    }

    fn expect_binary_op(&mut self) -> Result<BinaryOp> {
        match self.next("`AND` or `OR`")? {
            Token::And => Ok(BinaryOp::And),
            Token::Or => Ok(BinaryOp::Or),
            other => Err(ParseError::UnexpectedToken {
                line: self.line,
                token: other.text(),
            }),
        }
    }

    fn expect_shift_op(&mut self) -> Result<ShiftOp> {
        match self.next("`LSHIFT` or `RSHIFT`")? {
            Token::Lshift => Ok(ShiftOp::Lshift),
            Token::Rshift => Ok(ShiftOp::Rshift),
            other => Err(ParseError::UnexpectedToken {
                line: self.line,
                token: other.text(),
            }),
        }
    }

    /// Every shape has a fixed arity; leftover tokens are malformed input.
    fn finish(&mut self) -> Result<()> {
        match self.tokens.get(self.pos) {
            None => Ok(()),
            Some(extra) => Err(ParseError::TrailingTokens {
                line: self.line,
                token: extra.text(),
            }),
        }
    }

    // NOT x -> h
    fn parse_not(&mut self) -> Result<Instruction> {
        self.next("`NOT`")?; // keyword already checked by dispatch
        let input = self.expect_identifier()?;
        self.expect_arrow()?;
        let target = self.expect_identifier()?;
        Ok(Instruction::new(target, Expression::Not { input }))
    }

    // 123 -> x
    fn parse_const(&mut self) -> Result<Instruction> {
        let value = self.expect_literal()?;
        self.expect_arrow()?;
        let target = self.expect_identifier()?;
        Ok(Instruction::new(target, Expression::Const { value }))
    }

    // y -> x
    fn parse_relay(&mut self) -> Result<Instruction> {
        let source = self.expect_identifier()?;
        self.expect_arrow()?;
        let target = self.expect_identifier()?;
        Ok(Instruction::new(target, Expression::Wire { source }))
    }

    // x AND y -> d
    fn parse_binary(&mut self) -> Result<Instruction> {
        let lhs = self.expect_identifier()?;
        let op = self.expect_binary_op()?;
        let rhs = self.expect_identifier()?;
        self.expect_arrow()?;
        let target = self.expect_identifier()?;
        Ok(Instruction::new(target, Expression::Binary { op, lhs, rhs }))
    }

    // 1 AND y -> d
    fn parse_binary_imm(&mut self) -> Result<Instruction> {
        let lhs = self.expect_literal()?;
        let op = self.expect_binary_op()?;
        let rhs = self.expect_identifier()?;
        self.expect_arrow()?;
        let target = self.expect_identifier()?;
        Ok(Instruction::new(
            target,
            Expression::BinaryImm { op, lhs, rhs },
        ))
    }

    // x LSHIFT 2 -> f
    fn parse_shift(&mut self) -> Result<Instruction> {
        let input = self.expect_identifier()?;
        let op = self.expect_shift_op()?;
        let amount = self.expect_shift_amount()?;
        self.expect_arrow()?;
        let target = self.expect_identifier()?;
        Ok(Instruction::new(
            target,
            Expression::Shift { op, input, amount },
        ))
    }
}
