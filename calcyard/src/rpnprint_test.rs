use crate::parser::{RPNExpr, ShuntingParser};
use calclex::{MathToken, Op};

fn reprint(expr: &str) -> String {
    format!("{}", ShuntingParser::parse_str(expr).unwrap())
}

#[test]
fn minimal_parens() {
    assert_eq!(reprint("2+3*4"), "2 + 3 * 4");
    assert_eq!(reprint("(2+3)*4"), "(2 + 3) * 4");
    assert_eq!(reprint("((2))*((4))"), "2 * 4");
    assert_eq!(reprint("2*(3/4)"), "2 * (3 / 4)");
    assert_eq!(reprint("(8-3)-1"), "8 - 3 - 1");
    assert_eq!(reprint("8-(3-1)"), "8 - (3 - 1)");
}

#[test]
fn user_grouping_is_kept() {
    assert_eq!(reprint("2+(3+4)"), "2 + (3 + 4)");
}

#[test]
fn unary_minus() {
    assert_eq!(reprint("-5 + 3"), "-5 + 3");
    assert_eq!(reprint("3 - -2"), "3 - -2");
    assert_eq!(reprint("-(1+2)"), "-(1 + 2)");
    assert_eq!(reprint("--2"), "--2");
    assert_eq!(reprint("2*-(3)"), "2 * -3");
    assert_eq!(reprint("-2.5/.5"), "-2.5 / 0.5");
}

#[test]
fn malformed_postfix() {
    let rpn = RPNExpr(vec![
        MathToken::Number(2.0),
        MathToken::BOp(Op::Add),
    ]);
    assert_eq!(rpn.to_string(), "2 +");
    assert_eq!(RPNExpr(vec![]).to_string(), "");
    assert_eq!(reprint("2 + * 3"), "2 3 * +");
}
