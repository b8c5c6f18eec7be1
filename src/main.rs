// src/main.rs

use std::io::{self, Write};

use uqexpr::cli::initialize;
use uqexpr::config::{FAREWELL_MESSAGE, STDIN_PROMPT, WELCOME_MESSAGE};
use uqexpr::{ConfigError, Session};

// Diagnostics go to stderr and only when RUST_LOG is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn fail(err: ConfigError) -> ! {
    match &err {
        ConfigError::HelpRequested(text) => print!("{}", text),
        _ => eprintln!("{}", err),
    }
    std::process::exit(err.exit_code());
}

fn run() -> io::Result<()> {
    let (environment, config) = initialize(std::env::args_os()).unwrap_or_else(|e| fail(e));
    let input = config.input.open().unwrap_or_else(|e| fail(e));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    writeln!(out, "{}", WELCOME_MESSAGE)?;
    environment.write_listing(&mut out, config.precision)?;
    if config.input.is_stdin() {
        writeln!(out, "{}", STDIN_PROMPT)?;
    }
    out.flush()?;

    let mut session = Session::new(environment, config);
    session.run(input, &mut out, &mut err)?;

    writeln!(out, "{}", FAREWELL_MESSAGE)?;
    out.flush()
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("uqexpr: {}", e);
        std::process::exit(1);
    }
}
