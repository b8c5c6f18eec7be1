// tests/session_tests.rs

use test_utils::*;

#[cfg(test)]
mod line_handling_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_walkthrough() {
        let t = run_lines(&[], "x = 2+2\n@print\ny=x*3\nbad==1\n");
        assert_eq!(
            t.stdout,
            "x = 4\nVariables:\nx = 4\nNo loop variables were found.\ny = 12\n"
        );
        assert_eq!(t.stderr, RUN_ERROR);
    }

    #[test]
    fn test_comments_and_blank_lines_are_silent() {
        let t = run_lines(&[], "# comment\n   \n\t\n#x=1\n@print\n");
        assert_eq!(t.stdout, "There are no variables.\nNo loop variables were found.\n");
        assert_eq!(t.stderr, "");
    }

    #[test]
    fn test_defs_are_usable_in_expressions() {
        let t = run_lines(&["--def", "rate=0.25", "--def", "base=200"], "base * rate\nbase * (1 + rate)\n");
        assert_eq!(t.stdout, "Result = 50\nResult = 250\n");
    }

    #[test]
    fn test_loop_binding_is_immutable() {
        let t = run_lines(&["--forloop", "i,1,1,10"], "i = 5\n@print\n");
        assert_eq!(
            t.stdout,
            "i = 5\nThere are no variables.\nLoop variables:\ni = 1 (1, 1, 10)\n"
        );
    }

    #[test]
    fn test_loop_names_cannot_be_read_by_expressions() {
        let t = run_lines(&["--forloop", "i,1,1,10"], "i + 1\n");
        assert_eq!(t.stdout, "");
        assert_eq!(t.stderr, RUN_ERROR);
    }

    #[test]
    fn test_sigfigures_controls_every_value() {
        let t = run_lines(
            &["--sigfigures", "5", "--def", "third=0.333333333", "--forloop", "t,0.1234567,0.5,3"],
            "pi\n@print\n",
        );
        assert_eq!(
            t.stdout,
            "Result = 3.1416\nVariables:\nthird = 0.33333\nLoop variables:\nt = 0.12346 (0.12346, 0.5, 3)\n"
        );
    }

    #[test]
    fn test_errors_do_not_change_state() {
        let t = run_lines(&["--def", "a=1"], "a = 1/0*0\nb2 = 4\na = a +\n@print\n");
        assert_eq!(t.stdout, "Variables:\na = 1\nNo loop variables were found.\n");
        assert_eq!(t.stderr, RUN_ERROR.repeat(3));
    }

    #[test]
    fn test_infinity_is_a_result() {
        let t = run_lines(&[], "1/0\n");
        assert_eq!(t.stdout, "Result = inf\n");
    }

    #[test]
    fn test_whitespace_inside_tokens_is_removed() {
        let t = run_lines(&[], "to tal = 1 2 + 3\n");
        assert_eq!(t.stdout, "total = 15\n");
    }

    #[test]
    fn test_function_call_needs_parentheses_once_spaces_go() {
        let t = run_lines(&[], "n = fac 4\nn = fac(4)\n");
        assert_eq!(t.stdout, "n = 24\n");
        assert_eq!(t.stderr, RUN_ERROR);
    }

    #[test]
    fn test_large_values_use_exponent_form() {
        let t = run_lines(&[], "big = 10^6\nbig / 3\n");
        assert_eq!(t.stdout, "big = 1e+06\nResult = 3.33e+05\n");
    }

    #[test]
    fn test_last_line_without_newline() {
        let t = run_lines(&[], "1+1");
        assert_eq!(t.stdout, "Result = 2\n");
    }
}
