use std::ops::Deref;

use calclex::{LexError, MathToken, Op};
use thiserror::Error;
use tracing::trace;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

pub fn precedence(mt: &MathToken) -> (usize, Assoc) {
    // Unary minus binds tighter than any binary operator so that -2*3 is
    // (-2)*3 and 2*-3 is 2*(-3). It has no peers at its level, which
    // keeps a run of them (--3) stacked until their operand shows up.
    match *mt {
        MathToken::OParen => (0, Assoc::Left), // keep at bottom
        MathToken::BOp(Op::Add) | MathToken::BOp(Op::Sub) => (1, Assoc::Left),
        MathToken::BOp(Op::Mul) | MathToken::BOp(Op::Div) => (2, Assoc::Left),
        MathToken::UMinus => (3, Assoc::Right),
        // operands never sit on the operator stack
        MathToken::Number(_) | MathToken::CParen => (4, Assoc::Left),
    }
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum ParseError {
    #[error("missing opening parenthesis")]
    MissingOParen,
    #[error("missing closing parenthesis")]
    MissingCParen,
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// An expression in postfix order, ready to be evaluated.
#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Vec<MathToken>);

impl Deref for RPNExpr {
    type Target = [MathToken];
    fn deref(&self) -> &[MathToken] {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        let tokens = calclex::tokenize(expr)?;
        Self::parse(tokens)
    }

    pub fn parse(tokens: impl IntoIterator<Item = MathToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in tokens {
            match token {
                MathToken::Number(_) => out.push(token),
                MathToken::OParen => stack.push(token),
                MathToken::CParen => loop {
                    match stack.pop() {
                        Some(MathToken::OParen) => break,
                        Some(op) => out.push(op),
                        None => return Err(ParseError::MissingOParen),
                    }
                },
                MathToken::UMinus | MathToken::BOp(_) => {
                    let (prec_rhs, assoc_rhs) = precedence(&token);
                    while let Some(&top) = stack.last() {
                        let (prec_lhs, _) = precedence(&top);
                        if prec_lhs < prec_rhs {
                            break;
                        } else if prec_lhs == prec_rhs && assoc_rhs == Assoc::Right {
                            break;
                        }
                        trace!(%top, incoming = %token, "pop operator");
                        stack.pop();
                        out.push(top);
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                MathToken::OParen => return Err(ParseError::MissingCParen),
                token => out.push(token),
            }
        }
        Ok(RPNExpr(out))
    }
}
