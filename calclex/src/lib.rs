//! Tokenizer for plain arithmetic expressions.
//!
//! Numbers are unsigned decimal literals; a leading `-` is turned into
//! [`MathToken::UMinus`] or a binary [`Op::Sub`] depending on the token
//! emitted right before it.

mod scanner;
mod helpers;
mod math_tokenizer;

pub use scanner::Scanner;
pub use math_tokenizer::{tokenize, LexError, MathToken, MathTokenizer, Op};

pub use helpers::scan_math_op;
pub use helpers::scan_number;
pub use helpers::skip_whitespace;
