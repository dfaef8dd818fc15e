//! Arithmetic expression evaluation.
//!
//! Expressions go through three stages: [`calclex`] turns text into tokens,
//! [`ShuntingParser`] reorders them into postfix and [`RPNExpr::eval`]
//! reduces the postfix sequence with a value stack. [`calculate`] chains
//! the three and formats the result for display.
//!
//! ```
//! assert_eq!(calcyard::calculate("(2 + 3) * 4").unwrap(), "20");
//! assert_eq!(calcyard::calculate("1 / 4").unwrap(), "0.25");
//! ```

pub use calclex::{LexError, MathToken, Op};

pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod parser;

pub use self::rpneval::EvalErr;

mod rpnprint;
#[cfg(test)]
mod rpnprint_test;
mod rpneval;
#[cfg(test)]
mod rpneval_test;

pub use self::calc::{calculate, format_number, CalcError, Calculation, USAGE};

mod calc;
