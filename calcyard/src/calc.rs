use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::parser::{ParseError, RPNExpr, ShuntingParser};
use crate::rpneval::EvalErr;

pub const USAGE: &str = "Usage: calc <expression>  (example: calc 12/4)";

/// What callers get to see when an expression can't be calculated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Invalid expression.")]
    InvalidExpression,
    #[error("Cannot divide by zero.")]
    DivisionByZero,
}

impl CalcError {
    pub fn caller_message(&self) -> String {
        format!("Calculation error: {}", self)
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        debug!(error = %e, "rejected expression");
        CalcError::InvalidExpression
    }
}

impl From<EvalErr> for CalcError {
    fn from(e: EvalErr) -> Self {
        debug!(error = %e, "evaluation failed");
        match e {
            EvalErr::DivisionByZero => CalcError::DivisionByZero,
            EvalErr::MissingOperand
            | EvalErr::LeftoverOperands(_)
            | EvalErr::Overflow
            | EvalErr::BadToken(_) => CalcError::InvalidExpression,
        }
    }
}

/// Render a result: integral values without a decimal point, everything
/// else as the shortest decimal that round-trips to the same `f64`.
pub fn format_number(value: f64) -> String {
    // -0 prints as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}", value)
}

/// A successfully evaluated expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    pub rpn: RPNExpr,
    pub value: f64,
}

impl Calculation {
    pub fn run(expr: &str) -> Result<Calculation, CalcError> {
        let rpn = ShuntingParser::parse_str(expr.trim())?;
        let value = rpn.eval()?;
        debug!(%rpn, value, "calculated");
        Ok(Calculation { rpn, value })
    }

    pub fn formatted(&self) -> String {
        format_number(self.value)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.rpn, self.formatted())
    }
}

/// Evaluate `expr` and format the result. Blank input gets the usage line.
pub fn calculate(expr: &str) -> Result<String, CalcError> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Ok(USAGE.to_string());
    }
    Calculation::run(expr).map(|calc| calc.formatted())
}
