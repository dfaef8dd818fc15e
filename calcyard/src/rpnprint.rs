use crate::parser::{precedence, Assoc, RPNExpr};
use calclex::MathToken;
use std::fmt;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a MathToken),
    Node(&'a MathToken, Vec<AST<'a>>),
}

impl RPNExpr {
    // None if the postfix sequence doesn't reduce to a single tree
    fn build_ast(&self) -> Option<AST> {
        let mut ops = Vec::new();
        for token in self.0.iter() {
            let arity = match *token {
                MathToken::Number(_) => {
                    ops.push(AST::Leaf(token));
                    continue;
                }
                MathToken::BOp(_) => 2,
                MathToken::UMinus => 1,
                MathToken::OParen | MathToken::CParen => return None,
            };
            let n = ops.len().checked_sub(arity)?;
            let operands = ops.split_off(n);
            ops.push(AST::Node(token, operands));
        }
        match ops.len() {
            1 => ops.pop(),
            _ => None,
        }
    }
}

fn printer(root: &AST) -> (String, (usize, Assoc)) {
    match root {
        AST::Leaf(token) => (format!("{}", token), precedence(token)),
        AST::Node(token, args) => match (*token, &args[..]) {
            (MathToken::UMinus, [arg]) => {
                let subtree = printer(arg);
                let (prec, assoc) = precedence(token);
                if prec > (subtree.1).0 {
                    (format!("-({})", subtree.0), (prec, assoc))
                } else {
                    (format!("-{}", subtree.0), (prec, assoc))
                }
            }
            (MathToken::BOp(op), [lhs, rhs]) => {
                let (lhs, rhs) = (printer(lhs), printer(rhs));
                let (prec, assoc) = precedence(token);

                let lh = if prec > (lhs.1).0 || (prec == (lhs.1).0 && assoc != Assoc::Left) {
                    format!("({})", lhs.0)
                } else {
                    lhs.0
                };
                let rh = if prec > (rhs.1).0 || (prec == (rhs.1).0 && assoc != Assoc::Right) {
                    format!("({})", rhs.0)
                } else {
                    rhs.0
                };
                // NOTE: '2+(3+4)' will show parens to indicate that user
                // explicitly put them there
                (format!("{} {} {}", lh, op, rh), (prec, assoc))
            }
            // build_ast only makes nodes with the operator's arity
            _ => (format!("{}", token), precedence(token)),
        },
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.build_ast() {
            Some(ast) => write!(f, "{}", printer(&ast).0),
            None => {
                let tokens = self.0.iter().map(|t| t.to_string()).collect::<Vec<_>>();
                write!(f, "{}", tokens.join(" "))
            }
        }
    }
}
