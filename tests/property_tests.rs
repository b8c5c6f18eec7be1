// tests/property_tests.rs

use proptest::prelude::*;
use uqexpr::format_significant;
use uqexpr::validate::{valid_double, valid_loop_range, valid_variable_name};
use uqexpr::Environment;

proptest! {
    #[test]
    fn letters_up_to_twenty_are_valid_names(name in "[a-zA-Z]{1,20}") {
        prop_assert!(valid_variable_name(&name));
    }

    #[test]
    fn names_with_a_non_letter_are_rejected(
        head in "[a-zA-Z]{0,9}",
        bad in "[0-9_!$. -]",
        tail in "[a-zA-Z]{0,9}",
    ) {
        let name = format!("{head}{bad}{tail}");
        prop_assert!(!valid_variable_name(&name));
    }

    #[test]
    fn overlong_names_are_rejected(name in "[a-zA-Z]{21,40}") {
        prop_assert!(!valid_variable_name(&name));
    }

    #[test]
    fn trailing_garbage_is_not_a_double(digits in "[0-9]{1,6}", junk in "[g-zG-Z#@]{1,3}") {
        let text = format!("{digits}{junk}");
        prop_assert!(!valid_double(&text));
    }

    #[test]
    fn formatted_doubles_are_valid_and_round_trip(value in -1.0e6f64..1.0e6, precision in 2usize..=9) {
        let text = format!("{}", value);
        prop_assert!(valid_double(&text));
        let shown = format_significant(text.parse::<f64>().unwrap(), precision);
        let back: f64 = shown.parse().unwrap();
        let tolerance = value.abs().max(1e-300) * 10f64.powi(1 - precision as i32);
        prop_assert!((back - value).abs() <= tolerance, "{} -> {}", value, shown);
    }

    #[test]
    fn zero_increment_never_forms_a_loop(start in -100.0f64..100.0, end in -100.0f64..100.0) {
        prop_assert!(!valid_loop_range(start, 0.0, end));
    }

    #[test]
    fn increment_must_point_towards_end(start in -100.0f64..100.0, end in -100.0f64..100.0, step in 0.001f64..10.0) {
        let toward = if start <= end { step } else { -step };
        prop_assert!(valid_loop_range(start, toward, end));
        if start != end {
            prop_assert!(!valid_loop_range(start, -toward, end));
        }
    }

    #[test]
    fn repeated_assignment_keeps_one_binding(values in proptest::collection::vec(-1e9f64..1e9, 1..20)) {
        let mut env = Environment::new();
        for v in &values {
            env.assign("x", *v);
        }
        prop_assert_eq!(env.scalars().len(), 1);
        prop_assert_eq!(env.scalars()[0].value, *values.last().unwrap());
    }

    #[test]
    fn loop_bindings_ignore_assignment(value in -1e9f64..1e9) {
        let mut env = Environment::new();
        env.add_loop("i", 1.0, 1.0, 5.0);
        env.assign("i", value);
        prop_assert!(env.scalars().is_empty());
        prop_assert_eq!(env.loops()[0].start, 1.0);
    }
}
