#![deny(warnings)]

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::trace;

use crate::helpers;
use crate::scanner::Scanner;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
    Add, Sub, Mul, Div,
}

impl Op {
    pub fn from_symbol(symbol: char) -> Option<Op> {
        match symbol {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match *self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MathToken {
    Number(f64),
    BOp(Op),
    UMinus,
    OParen, CParen,
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MathToken::Number(n) => write!(f, "{}", n),
            MathToken::BOp(op) => write!(f, "{}", op),
            MathToken::UMinus => write!(f, "-"),
            MathToken::OParen => write!(f, "("),
            MathToken::CParen => write!(f, ")"),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum LexError {
    #[error("unexpected character {ch:?} at offset {pos}")]
    BadChar { ch: char, pos: usize },
    #[error("malformed number {0:?}")]
    BadNumber(String),
}

pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<MathToken>,
    failed: bool,
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer{src: Scanner::new(source), prev: None, failed: false}
    }

    // when would a minus be unary? we need to know the prev token
    fn makes_unary(prev: &Option<MathToken>) -> bool {
        match *prev {
            Some(MathToken::Number(_)) => false,
            Some(MathToken::CParen) => false,
            None => true,
            Some(MathToken::BOp(_)) | Some(MathToken::UMinus) | Some(MathToken::OParen) => true,
        }
    }

    // at most one '.' and at least one digit
    fn parse_number(literal: String) -> Result<MathToken, LexError> {
        let dots = literal.chars().filter(|&c| c == '.').count();
        if dots > 1 || !literal.chars().any(|c| c.is_ascii_digit()) {
            return Err(LexError::BadNumber(literal));
        }
        match f64::from_str(&literal) {
            Ok(n) => Ok(MathToken::Number(n)),
            Err(_) => Err(LexError::BadNumber(literal)),
        }
    }

    fn get_token(&mut self) -> Option<Result<MathToken, LexError>> {
        helpers::skip_whitespace(&mut self.src);
        let pos = self.src.offset();
        if let Some(op) = helpers::scan_math_op(&mut self.src) {
            let token = match op {
                '(' => MathToken::OParen,
                ')' => MathToken::CParen,
                '-' if Self::makes_unary(&self.prev) => MathToken::UMinus,
                _ => match Op::from_symbol(op) {
                    Some(op) => MathToken::BOp(op),
                    None => return Some(Err(LexError::BadChar{ch: op, pos})),
                },
            };
            Some(Ok(token))
        } else if let Some(num) = helpers::scan_number(&mut self.src) {
            Some(Self::parse_number(num))
        } else {
            self.src.next().map(|ch| Err(LexError::BadChar{ch, pos}))
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = Result<MathToken, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let token = self.get_token();
        match token {
            Some(Ok(ref t)) => {
                trace!(token = %t, "scanned");
                self.prev = Some(*t);
            }
            Some(Err(ref e)) => {
                trace!(error = %e, "scan failed");
                self.failed = true;
            }
            None => (),
        }
        token
    }
}

/// Split an expression into tokens, failing on the first lexical error.
pub fn tokenize(expr: &str) -> Result<Vec<MathToken>, LexError> {
    MathTokenizer::new(expr.chars()).collect()
}

///////////////////////////////////////////////////////////////////////////////
