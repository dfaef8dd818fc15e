use calclex::{MathToken, Op};
use thiserror::Error;
use tracing::trace;

use crate::parser::RPNExpr;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum EvalErr {
    #[error("operator is missing an operand")]
    MissingOperand,
    #[error("expression should reduce to 1 value, got {0}")]
    LeftoverOperands(usize),
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    Overflow,
    #[error("unexpected token in postfix expression: {0}")]
    BadToken(MathToken),
}

fn apply(op: Op, l: f64, r: f64) -> Result<f64, EvalErr> {
    match op {
        Op::Add => Ok(l + r),
        Op::Sub => Ok(l - r),
        Op::Mul => Ok(l * r),
        Op::Div if r == 0.0 => Err(EvalErr::DivisionByZero),
        Op::Div => Ok(l / r),
    }
}

impl RPNExpr {
    pub fn eval(&self) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in self.0.iter() {
            match *token {
                MathToken::Number(num) => operands.push(num),
                MathToken::BOp(op) => {
                    let r = operands.pop().ok_or(EvalErr::MissingOperand)?;
                    let l = operands.pop().ok_or(EvalErr::MissingOperand)?;
                    operands.push(apply(op, l, r)?);
                }
                MathToken::UMinus => {
                    let o = operands.pop().ok_or(EvalErr::MissingOperand)?;
                    operands.push(-o);
                }
                MathToken::OParen | MathToken::CParen => {
                    return Err(EvalErr::BadToken(*token))
                }
            }
            trace!(%token, depth = operands.len(), "eval");
        }
        match operands[..] {
            [value] if value.is_finite() => Ok(value),
            [_] => Err(EvalErr::Overflow),
            _ => Err(EvalErr::LeftoverOperands(operands.len())),
        }
    }
}
