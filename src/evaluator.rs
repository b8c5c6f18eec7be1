// src/evaluator.rs

use crate::ast::{BinOp, Expr};
use crate::bridge::Evaluator;
use crate::builtins;
use crate::error::EvalError;
use crate::parser::parse;

// --- The Evaluator ---
impl Expr {
    /// Evaluates against `(name, value)` bindings. Domain errors surface as
    /// NaN or infinity, never as a Rust error.
    pub fn eval(&self, variables: &[(&str, f64)]) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Var(name) => variables
                .iter()
                .find(|(var, _)| var == name)
                .map_or(f64::NAN, |&(_, value)| value),
            Expr::Neg(inner) => -inner.eval(variables),
            Expr::Binary(op, lhs, rhs) => {
                let a = lhs.eval(variables);
                let b = rhs.eval(variables);
                match op {
                    BinOp::Add => a + b,
                    BinOp::Sub => a - b,
                    BinOp::Mul => a * b,
                    BinOp::Div => a / b,
                    BinOp::Rem => a % b,
                    BinOp::Pow => a.powf(b),
                    BinOp::Comma => b,
                }
            }
            Expr::Call(name, args) => {
                let values: Vec<f64> = args.iter().map(|arg| arg.eval(variables)).collect();
                builtins::lookup(name).map_or(f64::NAN, |def| (def.func)(&values))
            }
        }
    }
}

/// The bundled arithmetic evaluator: parse, evaluate, and treat NaN as
/// failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArithmeticEvaluator;

impl Evaluator for ArithmeticEvaluator {
    fn evaluate(&self, expression: &str, variables: &[(&str, f64)]) -> Result<f64, EvalError> {
        let expr = parse(expression, variables)?;
        tracing::trace!(%expr, "parsed expression");
        let value = expr.eval(variables);
        if value.is_nan() {
            Err(EvalError::NotANumber)
        } else {
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_ok(input: &str) -> f64 {
        ArithmeticEvaluator.evaluate(input, &[]).unwrap()
    }

    fn eval_err(input: &str) -> EvalError {
        ArithmeticEvaluator.evaluate(input, &[]).unwrap_err()
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval_ok("2+2"), 4.0);
        assert_eq!(eval_ok("10-4-3"), 3.0);
        assert_eq!(eval_ok("2*3+4"), 10.0);
        assert_eq!(eval_ok("(2+3)*4"), 20.0);
        assert_eq!(eval_ok("7%4"), 3.0);
        assert_eq!(eval_ok("2^10"), 1024.0);
        assert_eq!(eval_ok("-2^2"), 4.0);
        assert_eq!(eval_ok("2^3^2"), 64.0);
        assert_eq!(eval_ok("1,2,3"), 3.0);
    }

    #[test]
    fn test_builtins() {
        assert_eq!(eval_ok("sqrt(16)"), 4.0);
        assert_eq!(eval_ok("abs -3"), 3.0);
        assert_eq!(eval_ok("fac 5"), 120.0);
        assert_eq!(eval_ok("ncr(5,2)"), 10.0);
        assert_eq!(eval_ok("pow(2,0.5)^2").round(), 2.0);
        assert!((eval_ok("pi") - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(eval_ok("floor(2.7)+ceil(2.2)"), 5.0);
    }

    #[test]
    fn test_variables() {
        let vars = [("x", 4.0), ("rate", 0.5)];
        assert_eq!(ArithmeticEvaluator.evaluate("x*3", &vars).unwrap(), 12.0);
        assert_eq!(ArithmeticEvaluator.evaluate("x*rate", &vars).unwrap(), 2.0);
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        assert_eq!(eval_ok("1/0"), f64::INFINITY);
        assert_eq!(eval_ok("-1/0"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_nan_is_failure() {
        assert_eq!(eval_err("0/0"), EvalError::NotANumber);
        assert_eq!(eval_err("sqrt(-1)"), EvalError::NotANumber);
        assert_eq!(eval_err("fac(-1)"), EvalError::NotANumber);
    }

    #[test]
    fn test_parse_failure() {
        assert!(matches!(eval_err("y+1"), EvalError::Parse(_)));
        assert!(matches!(eval_err("2**3"), EvalError::Parse(_)));
    }
}
