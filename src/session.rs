// src/session.rs

use std::io::{self, BufRead, Write};

use crate::bridge::{evaluate_in, Evaluator};
use crate::config::{Config, PRINT_COMMAND, RUN_ERROR_MESSAGE};
use crate::environment::Environment;
use crate::error::LineError;
use crate::evaluator::ArithmeticEvaluator;
use crate::format::format_significant;
use crate::tokens::{is_space, split_fields, ASSIGNMENT_FIELDS};
use crate::validate::valid_variable_name;

// --- Line Classification ---

/// The shape of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Empty after whitespace removal, or a `#` comment.
    Blank,
    Print,
    TooManyEquals,
    /// Whitespace-free expression text.
    Expression(String),
    /// Whitespace-free `name=expr` text.
    Assignment(String),
}

/// Removes every whitespace character, interior ones included.
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|&c| !is_space(c)).collect()
}

/// Counts `=` from the second character on; a leading `=` is not counted.
pub fn count_equals(normalized: &str) -> usize {
    normalized.chars().skip(1).filter(|&c| c == '=').count()
}

pub fn classify(line: &str) -> LineKind {
    let normalized = strip_whitespace(line);
    if normalized.is_empty() || normalized.starts_with('#') {
        return LineKind::Blank;
    }
    // The command must match the raw line exactly, surrounding spaces and all.
    if line == PRINT_COMMAND {
        return LineKind::Print;
    }
    match count_equals(&normalized) {
        0 => LineKind::Expression(normalized),
        1 => LineKind::Assignment(normalized),
        _ => LineKind::TooManyEquals,
    }
}

// --- The Session ---

/// Line-processing state: the environment, the configuration and an
/// evaluator. Lives for the whole run.
pub struct Session<E = ArithmeticEvaluator> {
    environment: Environment,
    config: Config,
    evaluator: E,
}

impl Session<ArithmeticEvaluator> {
    pub fn new(environment: Environment, config: Config) -> Self {
        Self::with_evaluator(environment, config, ArithmeticEvaluator)
    }
}

impl<E: Evaluator> Session<E> {
    pub fn with_evaluator(environment: Environment, config: Config, evaluator: E) -> Self {
        Session { environment, config, evaluator }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    fn fmt(&self, value: f64) -> String {
        format_significant(value, self.config.precision)
    }

    /// Handles one raw line, writing any result to `out`.
    ///
    /// A returned error other than `LineError::Io` leaves the environment
    /// untouched.
    pub fn process_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), LineError> {
        let kind = classify(line);
        tracing::debug!(?kind, "classified line");
        match kind {
            LineKind::Blank => Ok(()),
            LineKind::Print => {
                self.environment.write_listing(out, self.config.precision)?;
                Ok(())
            }
            LineKind::TooManyEquals => Err(LineError::TooManyEquals),
            LineKind::Expression(expr) => {
                let value = evaluate_in(&self.evaluator, &expr, &self.environment)?;
                writeln!(out, "Result = {}", self.fmt(value))?;
                Ok(())
            }
            LineKind::Assignment(text) => self.assignment(&text, out),
        }
    }

    fn assignment<W: Write>(&mut self, text: &str, out: &mut W) -> Result<(), LineError> {
        let [name, expr] = split_fields(text, '=', ASSIGNMENT_FIELDS)[..] else {
            return Err(LineError::MalformedAssignment);
        };
        // The right-hand side is checked before the name.
        let value = evaluate_in(&self.evaluator, expr, &self.environment)?;
        if !valid_variable_name(name) {
            return Err(LineError::InvalidName(name.to_string()));
        }
        // Echoed even when `name` is a loop binding and the write is dropped.
        writeln!(out, "{} = {}", name, self.fmt(value))?;
        self.environment.assign(name, value);
        Ok(())
    }

    /// Processes every line of `input`. Per-line failures print the generic
    /// run error to `err` and processing continues; only a failure to write
    /// output ends the run early.
    pub fn run<R: BufRead, W: Write, V: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut V,
    ) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "input read failed; treating as end of input");
                    break;
                }
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            let line = String::from_utf8_lossy(&buf);
            match self.process_line(&line, out) {
                Ok(()) => {}
                Err(LineError::Io(e)) => return Err(e),
                Err(e) => {
                    tracing::debug!(error = %e, line = %line, "line rejected");
                    writeln!(err, "{}", RUN_ERROR_MESSAGE)?;
                }
            }
        }
        out.flush()
    }
}
