// src/tokens.rs

// Field splitting for `name=value`, `name,start,increment,end` and
// assignment lines.

/// Maximum fields read from a `--def` specification. One more than needed so
/// a stray extra field is visible to the caller.
pub const DEF_FIELDS: usize = 3;
/// Maximum fields read from a `--forloop` specification.
pub const LOOP_FIELDS: usize = 5;
/// Maximum fields read from an assignment line.
pub const ASSIGNMENT_FIELDS: usize = 2;

/// Whitespace as C `isspace` sees it in the default locale. Unlike
/// `char::is_ascii_whitespace` this includes vertical tab, and unlike
/// `char::is_whitespace` it excludes non-ASCII spaces.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Splits `input` on every `delim`, keeping at most `max_fields` fields.
///
/// Empty fields (leading, trailing or repeated delimiters) are skipped, so
/// `"a==b"` yields `["a", "b"]`. The number of fields produced is the
/// length of the returned vector.
pub fn split_fields(input: &str, delim: char, max_fields: usize) -> Vec<&str> {
    input
        .split(delim)
        .filter(|field| !field.is_empty())
        .take(max_fields)
        .collect()
}

/// Checks that `input` contains exactly the number of delimiters its
/// specification form needs: one `=` or three `,`. Any other delimiter is
/// accepted unchecked.
pub fn delim_check(input: &str, delim: char) -> bool {
    let expected = match delim {
        '=' => 1,
        ',' => 3,
        _ => return true,
    };
    input.chars().filter(|&c| c == delim).count() == expected
}
