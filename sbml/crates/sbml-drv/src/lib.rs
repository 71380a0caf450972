//! sbml-drv - the command-line driver: argument parsing, source loading,
//! and orchestration of the lex -> parse -> eval pipeline.
//!
//! The language core (`sbml-lex`/`sbml-par`/`sbml-eval`) knows nothing
//! about files or processes; this crate is the thin host-level shell
//! around it, in the same spirit as the host compiler's own driver crate:
//! a `Config`/`Session` pair, `anyhow` for host-level failures (a source
//! file that can't be read), and `tracing` spans around each phase for
//! diagnostics that never affect stdout or the exit code.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

use sbml_eval::eval_program;
use sbml_par::parse;
use sbml_util::SbmlError;

/// Parsed command-line configuration: exactly one positional argument, a
/// path to a source file (`spec.md` §6).
#[derive(Debug, Clone)]
pub struct Config {
    pub source_path: PathBuf,
}

/// The one-line message printed to stdout, and the nonzero exit used, for
/// any invocation other than "exactly one positional argument."
pub const USAGE: &str = "usage: sbml <source-file>";

impl Config {
    /// Parses a program's `argv` (excluding `argv[0]`). Zero or more than
    /// one argument is a usage error, not a language error — it is never
    /// reported as `SYNTAX ERROR`/`SEMANTIC ERROR`.
    pub fn parse(args: &[String]) -> Result<Config, UsageError> {
        match args {
            [path] => Ok(Config {
                source_path: PathBuf::from(path),
            }),
            _ => Err(UsageError),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UsageError;

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{USAGE}")
    }
}

impl std::error::Error for UsageError {}

/// One invocation's state: the loaded source and where program output
/// goes. Kept separate from `Config` the way the host driver separates
/// parsed arguments from the session that acts on them, even though SBML
/// has no incremental cache or multi-file compilation to carry alongside
/// it.
pub struct Session {
    config: Config,
}

/// The outcome of running a whole program: either it completed (having
/// already written any `print` output), or the language itself raised one
/// of the two fatal categories. Per `spec.md` §6, both are reported to
/// standard output and neither is a process failure — `Session::run`
/// returns `Ok` either way; only a host-level failure (the file could not
/// be read) is an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Failed(SbmlError),
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Reads the source file, then lexes, parses, and evaluates it,
    /// writing `print` output to `out`. Returns `Err` only for a host-level
    /// I/O failure; a malformed or semantically invalid SBML program is
    /// reported through the `Ok(Outcome::Failed(_))` variant instead, per
    /// `spec.md` §6's "exit code 0 on synax/semantic errors."
    #[instrument(skip(self, out))]
    pub fn run(&self, out: &mut impl Write) -> Result<Outcome> {
        let source = std::fs::read_to_string(&self.config.source_path).with_context(|| {
            format!(
                "could not read source file {}",
                self.config.source_path.display()
            )
        })?;

        if source.trim().is_empty() {
            warn!("source file is empty");
        }

        debug!(bytes = source.len(), "read source file");

        match self.eval(&source, out) {
            Ok(()) => Ok(Outcome::Completed),
            Err(e) => {
                writeln!(out, "{e}").context("writing program output")?;
                Ok(Outcome::Failed(e))
            }
        }
    }

    #[instrument(skip(self, source, out))]
    fn eval(&self, source: &str, out: &mut impl Write) -> Result<(), SbmlError> {
        let program = parse(source)?;
        debug!(statements = program.len(), "parsed program");
        eval_program(&program, out)
    }
}

/// The library-level entry point `main.rs` calls: parses `argv`, and on a
/// usage error prints [`USAGE`] to stdout rather than stderr (per
/// `spec.md` §6, this is the "one-line usage message to standard output"
/// case, distinct from the two in-language error categories). Returns the
/// process exit code.
pub fn run(args: &[String]) -> Result<i32> {
    let config = match Config::parse(args) {
        Ok(config) => config,
        Err(_) => {
            println!("{USAGE}");
            return Ok(1);
        }
    };

    let session = Session::new(config);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    session.run(&mut handle)?;
    Ok(0)
}
