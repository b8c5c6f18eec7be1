// src/config.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::error::ConfigError;

// --- Message Table ---

pub const USAGE_MESSAGE: &str =
    "Usage: ./uqexpr [--sigfigures 2..9] [--forloop string] [--def string] [inputfilename]";
pub const INVALID_VARIABLES_MESSAGE: &str =
    "uqexpr: invalid variable(s) specified on the command line";
pub const DUPLICATE_NAME_MESSAGE: &str = "uqexpr: one or more variables are duplicated";
pub const STDIN_PROMPT: &str = "Submit your expressions and assignment operations to be evaluated.";
pub const WELCOME_MESSAGE: &str = "Welcome to uqexpr!";
pub const FAREWELL_MESSAGE: &str = "Thanks for using uqexpr!";
pub const RUN_ERROR_MESSAGE: &str =
    "Error in command, expression or assignment operation detected";

pub const PRINT_COMMAND: &str = "@print";

pub const VARIABLES_HEADER: &str = "Variables:";
pub const NO_VARIABLES: &str = "There are no variables.";
pub const LOOP_VARIABLES_HEADER: &str = "Loop variables:";
pub const NO_LOOP_VARIABLES: &str = "No loop variables were found.";

// --- Exit Statuses ---

pub const EXIT_USAGE: i32 = 12;
pub const EXIT_INVALID_VARIABLES: i32 = 4;
pub const EXIT_DUPLICATE_NAME: i32 = 18;
pub const EXIT_FILE_READ: i32 = 19;

// --- Precision ---

pub const DEFAULT_PRECISION: usize = 3;
pub const MIN_PRECISION: usize = 2;
pub const MAX_PRECISION: usize = 9;

/// Where input lines come from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn is_stdin(&self) -> bool {
        matches!(self, InputSource::Stdin)
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, ConfigError> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            InputSource::File(path) => File::open(path)
                .map(|file| Box::new(BufReader::new(file)) as Box<dyn BufRead>)
                .map_err(|_| ConfigError::FileRead(path.display().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Significant figures used for every printed value.
    pub precision: usize,
    pub input: InputSource,
}

impl Default for Config {
    fn default() -> Self {
        Config { precision: DEFAULT_PRECISION, input: InputSource::Stdin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.precision, 3);
        assert!(config.input.is_stdin());
    }

    #[test]
    fn test_open_missing_file() {
        let source = InputSource::File(PathBuf::from("/definitely/not/here.txt"));
        match source.open() {
            Err(ConfigError::FileRead(path)) => assert_eq!(path, "/definitely/not/here.txt"),
            _ => panic!("expected a file read error"),
        }
    }
}
