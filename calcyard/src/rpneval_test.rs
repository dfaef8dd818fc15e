use crate::parser::{RPNExpr, ShuntingParser};
use crate::rpneval::EvalErr;
use calclex::{MathToken, Op};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

fn eval_str(expr: &str) -> Result<f64, EvalErr> {
    ShuntingParser::parse_str(expr).unwrap().eval()
}

#[test]
fn test_eval1() {
    fuzzy_eq!(eval_str("3+4*2/-(1-5)").unwrap(), 5.0);
}

#[test]
fn test_eval2() {
    fuzzy_eq!(eval_str("(-(1-9*9) / (1 + 6*6))").unwrap(), 2.162162162162162);
}

#[test]
fn test_eval3() {
    fuzzy_eq!(eval_str("2 + 3 * 4").unwrap(), 14.0);
    fuzzy_eq!(eval_str("(2 + 3) * 4").unwrap(), 20.0);
    fuzzy_eq!(eval_str("100 / 10 / 5").unwrap(), 2.0);
    fuzzy_eq!(eval_str("10 - 4 - 3").unwrap(), 3.0);
}

#[test]
fn test_eval_unary() {
    fuzzy_eq!(eval_str("-5 + 3").unwrap(), -2.0);
    fuzzy_eq!(eval_str("3 - -2").unwrap(), 5.0);
    fuzzy_eq!(eval_str("---2").unwrap(), -2.0);
    fuzzy_eq!(eval_str("-2 * -3").unwrap(), 6.0);
    fuzzy_eq!(eval_str("-(2 + 3) * 2").unwrap(), -10.0);
}

#[test]
fn test_eval_decimals() {
    fuzzy_eq!(eval_str(".5 + 5.").unwrap(), 5.5);
    fuzzy_eq!(eval_str("0.1 + 0.2").unwrap(), 0.3);
    fuzzy_eq!(eval_str("1 / 3").unwrap(), 0.3333333333333333);
}

#[test]
fn division_by_zero() {
    assert_eq!(eval_str("10 / 0"), Err(EvalErr::DivisionByZero));
    assert_eq!(eval_str("1 / (2 - 2)"), Err(EvalErr::DivisionByZero));
    assert_eq!(eval_str("1 / -0"), Err(EvalErr::DivisionByZero));
    fuzzy_eq!(eval_str("0 / 5").unwrap(), 0.0);
}

#[test]
fn bad_structure() {
    assert_eq!(eval_str("2 + * 3"), Err(EvalErr::MissingOperand));
    assert_eq!(eval_str("-"), Err(EvalErr::MissingOperand));
    assert_eq!(eval_str("2 3"), Err(EvalErr::LeftoverOperands(2)));
    assert_eq!(eval_str("()"), Err(EvalErr::LeftoverOperands(0)));
    assert_eq!(eval_str(""), Err(EvalErr::LeftoverOperands(0)));
}

#[test]
fn bad_tokens() {
    let rpn = RPNExpr(vec![MathToken::Number(1.0), MathToken::OParen]);
    assert_eq!(rpn.eval(), Err(EvalErr::BadToken(MathToken::OParen)));
}

#[test]
fn overflow() {
    let big = "9".repeat(300);
    let expr = format!("{} * {}", big, big);
    assert_eq!(eval_str(&expr), Err(EvalErr::Overflow));

    let rpn = RPNExpr(vec![
        MathToken::Number(f64::MAX),
        MathToken::Number(f64::MAX),
        MathToken::BOp(Op::Add),
    ]);
    assert_eq!(rpn.eval(), Err(EvalErr::Overflow));
}

#[test]
fn reentrant() {
    let rpn = ShuntingParser::parse_str("7 * (3 - 1)").unwrap();
    assert_eq!(rpn.eval(), rpn.eval());
    fuzzy_eq!(rpn.eval().unwrap(), 14.0);
}
