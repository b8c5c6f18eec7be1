// src/builtins.rs

use paste::paste;

use crate::math;

// Uniform signature for every builtin. The parser guarantees `args` has
// exactly `arity` elements.
pub type BuiltinFn = fn(&[f64]) -> f64;

pub struct BuiltinDef {
    pub name: &'static str,
    pub arity: usize,
    pub func: BuiltinFn,
}

// --- Macro Template System ---

macro_rules! define_builtins {
    (
        // Nullary builtins that return a fixed constant
        nullary_constant: [$(($c_name:literal, $c_index:expr, $c_val:path)),*],
        // Unary functions that call a pure function
        unary_pure_fn: [$(($u_name:literal, $u_index:expr, $u_func:path)),*],
        // Binary functions that call a pure function
        binary_pure_fn: [$(($b_name:literal, $b_index:expr, $b_func:path)),*]
    ) => {
        paste! {
            // 1. Wrappers for constants.
            $(
                fn [<builtin_ $c_name>](_args: &[f64]) -> f64 {
                    $c_val
                }
            )*

            // 2. Wrappers for unary functions.
            $(
                fn [<builtin_ $u_name>](args: &[f64]) -> f64 {
                    match args {
                        [a] => $u_func(*a),
                        _ => f64::NAN,
                    }
                }
            )*

            // 3. Wrappers for binary functions.
            $(
                fn [<builtin_ $b_name>](args: &[f64]) -> f64 {
                    match args {
                        [a, b] => $b_func(*a, *b),
                        _ => f64::NAN,
                    }
                }
            )*
        }

        // 4. The BUILTINS table, in index order.
        pub static BUILTINS: &[BuiltinDef] = &[
            $(paste! { BuiltinDef { name: $c_name, arity: 0, func: [<builtin_ $c_name>] } }),*,
            $(paste! { BuiltinDef { name: $u_name, arity: 1, func: [<builtin_ $u_name>] } }),*,
            $(paste! { BuiltinDef { name: $b_name, arity: 2, func: [<builtin_ $b_name>] } }),*,
        ];

        // 5. Name to index in BUILTINS.
        pub static BUILTIN_MAP: phf::Map<&'static str, usize> = phf::phf_map! {
            $( $c_name => $c_index, )*
            $( $u_name => $u_index, )*
            $( $b_name => $b_index, )*
        };
    };
}

define_builtins! {
    nullary_constant: [
        ("pi", 0, math::PI),
        ("e",  1, math::E)
    ],
    unary_pure_fn: [
        ("abs",   2, math::fl_abs),
        ("acos",  3, math::fl_acos),
        ("asin",  4, math::fl_asin),
        ("atan",  5, math::fl_atan),
        ("ceil",  6, math::fl_ceil),
        ("cos",   7, math::fl_cos),
        ("cosh",  8, math::fl_cosh),
        ("exp",   9, math::fl_exp),
        ("fac",   10, math::fac),
        ("floor", 11, math::fl_floor),
        ("ln",    12, math::fl_ln),
        ("log",   13, math::fl_log10),
        ("log10", 14, math::fl_log10),
        ("sin",   15, math::fl_sin),
        ("sinh",  16, math::fl_sinh),
        ("sqrt",  17, math::fl_sqrt),
        ("tan",   18, math::fl_tan),
        ("tanh",  19, math::fl_tanh)
    ],
    binary_pure_fn: [
        ("atan2", 20, math::fl_atan2),
        ("ncr",   21, math::ncr),
        ("npr",   22, math::npr),
        ("pow",   23, math::fl_pow)
    ]
}

pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_MAP.get(name).and_then(|&index| BUILTINS.get(index))
}
