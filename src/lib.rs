// src/lib.rs

// --- Module Declarations ---
pub mod ast;
pub mod bridge;
pub mod builtins;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod math;
pub mod parser;
pub mod session;
pub mod tokens;
pub mod validate;

// --- Public API Re-exports ---
pub use bridge::Evaluator;
pub use config::{Config, InputSource};
pub use environment::{Assignment, Environment, LoopBinding, ScalarBinding};
pub use error::{ConfigError, EvalError, LineError, ParseError};
pub use evaluator::ArithmeticEvaluator;
pub use format::format_significant;
pub use session::{classify, LineKind, Session};
