// src/error.rs

use thiserror::Error;

use crate::config::{
    DUPLICATE_NAME_MESSAGE, EXIT_DUPLICATE_NAME, EXIT_FILE_READ, EXIT_INVALID_VARIABLES,
    EXIT_USAGE, INVALID_VARIABLES_MESSAGE, USAGE_MESSAGE,
};

/// Fatal startup errors. Each one maps to a fixed process exit status.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{}", USAGE_MESSAGE)]
    Usage,
    #[error("{}", INVALID_VARIABLES_MESSAGE)]
    InvalidVariables,
    #[error("{}", DUPLICATE_NAME_MESSAGE)]
    DuplicateName,
    #[error("uqexpr: unable to read from input file \"{0}\"")]
    FileRead(String),
    /// `--help` or `--version` output; not a failure, but still ends startup.
    #[error("{0}")]
    HelpRequested(String),
}

impl ConfigError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Usage => EXIT_USAGE,
            ConfigError::InvalidVariables => EXIT_INVALID_VARIABLES,
            ConfigError::DuplicateName => EXIT_DUPLICATE_NAME,
            ConfigError::FileRead(_) => EXIT_FILE_READ,
            ConfigError::HelpRequested(_) => 0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Parse error at column {col}: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub col: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseErrorKind {
    #[error("Unexpected character: '{0}'")]
    UnexpectedChar(char),
    #[error("Unexpected end of input")]
    UnexpectedEnd,
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
    #[error("Unknown identifier: '{0}'")]
    UnknownIdentifier(String),
    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),
}

/// Failure signal of the expression evaluator.
#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("expression evaluated to NaN")]
    NotANumber,
}

/// Recoverable errors raised while handling a single input line.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("more than one '=' in line")]
    TooManyEquals,
    #[error("assignment needs a name and an expression")]
    MalformedAssignment,
    #[error("invalid variable name: '{0}'")]
    InvalidName(String),
    #[error("evaluation failed: {0}")]
    Evaluation(#[from] EvalError),
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
