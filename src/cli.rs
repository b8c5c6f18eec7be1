// src/cli.rs

//! Command-line parsing into the starting environment and configuration.
//!
//! Usage:
//!   uqexpr [--sigfigures D] [--forloop name,start,increment,end] [--def name=value] [input]

use std::ffi::OsString;
use std::fs::File;
use std::path::PathBuf;

use clap::{CommandFactory, Parser as ClapParser};

use crate::config::{Config, InputSource, MAX_PRECISION, MIN_PRECISION};
use crate::environment::Environment;
use crate::error::ConfigError;
use crate::tokens::{delim_check, split_fields, DEF_FIELDS, LOOP_FIELDS};
use crate::validate::{parse_double, valid_variable_name, validate_loop_tokens};

/// The documented command-line surface. Arguments are parsed by
/// [`initialize`]; clap renders the `--help` and `--version` text.
#[derive(ClapParser, Debug)]
#[command(name = "uqexpr", version, about = "Evaluate expressions and assignments line by line", long_about = None)]
pub struct Cli {
    /// Significant figures for printed values (2..9).
    #[arg(long = "sigfigures", value_name = "D")]
    pub sigfigures: Option<usize>,

    /// Declare a loop variable as name,start,increment,end.
    #[arg(long = "forloop", value_name = "SPEC")]
    pub forloop: Vec<String>,

    /// Define a variable as name=value.
    #[arg(long = "def", value_name = "SPEC")]
    pub def: Vec<String>,

    /// File to read lines from. Standard input is used when omitted.
    pub input: Option<PathBuf>,
}

/// An option that consumes the argument after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliOption {
    SigFigures,
    ForLoop,
    Def,
}

impl CliOption {
    // Options are matched exactly; `--def=a=1` is not `--def`.
    fn from_arg(arg: &OsString) -> Option<Self> {
        match arg.to_str()? {
            "--sigfigures" => Some(CliOption::SigFigures),
            "--forloop" => Some(CliOption::ForLoop),
            "--def" => Some(CliOption::Def),
            _ => None,
        }
    }
}

fn parse_sigfigures(text: &str) -> Option<usize> {
    let mut chars = text.chars();
    match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
        (Some(d), None) if (MIN_PRECISION..=MAX_PRECISION).contains(&(d as usize)) => Some(d as usize),
        _ => None,
    }
}

// --- Specification Parsing ---

/// Adds a `name=value` definition to `env`.
pub fn def_handler(spec: &str, env: &mut Environment) -> Result<(), ConfigError> {
    if !delim_check(spec, '=') {
        return Err(ConfigError::InvalidVariables);
    }
    let [name, value] = split_fields(spec, '=', DEF_FIELDS)[..] else {
        return Err(ConfigError::InvalidVariables);
    };
    if !valid_variable_name(name) {
        return Err(ConfigError::InvalidVariables);
    }
    let value = parse_double(value).ok_or(ConfigError::InvalidVariables)?;
    env.add_scalar(name, value);
    Ok(())
}

/// Adds a `name,start,increment,end` loop declaration to `env`.
pub fn loop_handler(spec: &str, env: &mut Environment) -> Result<(), ConfigError> {
    if !delim_check(spec, ',') {
        return Err(ConfigError::InvalidVariables);
    }
    let tokens = split_fields(spec, ',', LOOP_FIELDS);
    if !validate_loop_tokens(&tokens) {
        return Err(ConfigError::InvalidVariables);
    }
    let parse = |text: &str| parse_double(text).ok_or(ConfigError::InvalidVariables);
    env.add_loop(tokens[0], parse(tokens[1])?, parse(tokens[2])?, parse(tokens[3])?);
    Ok(())
}

// A trailing argument that is not an option names the input file.
fn input_file(arg: &OsString) -> Result<InputSource, ConfigError> {
    if arg.to_string_lossy().starts_with("--") {
        return Err(ConfigError::Usage);
    }
    let path = PathBuf::from(arg);
    File::open(&path).map_err(|_| ConfigError::FileRead(path.display().to_string()))?;
    Ok(InputSource::File(path))
}

// --- Initialization ---

/// Parses an argument list (program name first) into the starting
/// environment and configuration.
///
/// Arguments are walked left to right and the first error found ends the
/// walk. Name uniqueness across the whole environment is checked last.
/// `--help` or `--version` as the only argument prints clap's text instead.
pub fn initialize<I, T>(args: I) -> Result<(Environment, Config), ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = args.into_iter().skip(1).map(Into::into).collect();

    if let [only] = argv.as_slice() {
        match only.to_str() {
            Some("--help") => return Err(ConfigError::HelpRequested(Cli::command().render_help().to_string())),
            Some("--version") => return Err(ConfigError::HelpRequested(Cli::command().render_version())),
            _ => {}
        }
    }

    let mut env = Environment::new();
    let mut config = Config::default();
    let mut precision_seen = false;

    let mut i = 0;
    while i < argv.len() {
        let arg = &argv[i];
        let Some(option) = CliOption::from_arg(arg) else {
            if i + 1 != argv.len() {
                tracing::debug!(arg = %arg.to_string_lossy(), "unexpected argument");
                return Err(ConfigError::Usage);
            }
            config.input = input_file(arg)?;
            i += 1;
            continue;
        };

        // An option is never the last argument.
        let Some(value) = argv.get(i + 1) else {
            return Err(ConfigError::Usage);
        };
        match option {
            CliOption::SigFigures => {
                if precision_seen {
                    return Err(ConfigError::Usage);
                }
                precision_seen = true;
                config.precision = value.to_str().and_then(parse_sigfigures).ok_or(ConfigError::Usage)?;
            }
            CliOption::Def => {
                def_handler(value.to_str().ok_or(ConfigError::InvalidVariables)?, &mut env)?;
            }
            CliOption::ForLoop => {
                loop_handler(value.to_str().ok_or(ConfigError::InvalidVariables)?, &mut env)?;
            }
        }
        i += 2;
    }

    if !env.check_unique() {
        return Err(ConfigError::DuplicateName);
    }

    tracing::debug!(
        scalars = env.scalars().len(),
        loops = env.loops().len(),
        precision = config.precision,
        "initialized from command line"
    );
    Ok((env, config))
}
