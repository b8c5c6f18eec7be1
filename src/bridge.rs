// src/bridge.rs

// Boundary between line handling and whatever evaluates arithmetic.

use crate::environment::Environment;
use crate::error::EvalError;

/// Evaluates an expression against an ordered `(name, value)` table.
///
/// Any failure (bad syntax, unknown name, a NaN result) comes back as an
/// `EvalError`; infinities are ordinary results.
pub trait Evaluator {
    fn evaluate(&self, expression: &str, variables: &[(&str, f64)]) -> Result<f64, EvalError>;
}

/// Evaluates `expression` with the environment's scalars in scope. Loop
/// bindings are not visible.
pub fn evaluate_in<E: Evaluator + ?Sized>(
    evaluator: &E,
    expression: &str,
    environment: &Environment,
) -> Result<f64, EvalError> {
    let table = environment.variable_table();
    let result = evaluator.evaluate(expression, &table);
    tracing::debug!(expression, ?result, "evaluated");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::ArithmeticEvaluator;
    use std::cell::RefCell;

    // Records what the bridge hands over.
    struct Recording {
        seen: RefCell<Vec<(String, Vec<(String, f64)>)>>,
    }

    impl Evaluator for Recording {
        fn evaluate(&self, expression: &str, variables: &[(&str, f64)]) -> Result<f64, EvalError> {
            let vars = variables.iter().map(|(n, v)| (n.to_string(), *v)).collect();
            self.seen.borrow_mut().push((expression.to_string(), vars));
            Ok(1.0)
        }
    }

    #[test]
    fn test_passes_scalars_only() {
        let mut env = Environment::new();
        env.add_scalar("a", 1.5);
        env.add_loop("i", 1.0, 1.0, 3.0);
        let recorder = Recording { seen: RefCell::new(Vec::new()) };

        assert_eq!(evaluate_in(&recorder, "a+i", &env), Ok(1.0));
        let seen = recorder.seen.borrow();
        assert_eq!(seen[0], ("a+i".to_string(), vec![("a".to_string(), 1.5)]));
    }

    #[test]
    fn test_loop_names_are_unknown_to_expressions() {
        let mut env = Environment::new();
        env.add_loop("i", 1.0, 1.0, 3.0);
        assert!(matches!(evaluate_in(&ArithmeticEvaluator, "i+1", &env), Err(EvalError::Parse(_))));
    }
}
