//! typeform CLI.
//!
//! Provides the `typeform` binary with subcommands for working with
//! limit specifications. `check` validates a single value against a
//! limits file; `ask` runs the interactive question loop on the real
//! console until an accepted answer is produced.
//!
//! Both subcommands use the same `typeform_check::check_limits` engine,
//! ensuring identical validation behavior from both entry points.

use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use typeform_ask::{ask_user, AskError, TypeNameRegistry};
use typeform_check::{check_limits, CheckOutcome};
use typeform_core::{ComparatorRegistry, Limit};

/// Type formation and validation tools.
#[derive(Parser)]
#[command(name = "typeform", about = "Type formation and validation tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Check a value against a limits file.
    Check {
        /// The value text to check.
        #[arg(short, long)]
        value: String,

        /// Type name used to coerce the value (e.g. integer, float, text).
        #[arg(short = 't', long = "type", default_value = "integer")]
        type_name: String,

        /// Path to a JSON limits file (an array of limit objects).
        #[arg(short, long)]
        limits: Option<PathBuf>,

        /// Print the full satisfaction matrix as JSON instead of failing
        /// on unmet limits.
        #[arg(long)]
        verbose: bool,
    },

    /// Interactively ask a question until an accepted answer is given.
    Ask {
        /// The question to put to the user.
        #[arg(short, long)]
        question: String,

        /// Type name the answer must coerce to.
        #[arg(short = 't', long = "type", default_value = "text")]
        type_name: String,

        /// Path to a JSON limits file the answer must satisfy.
        #[arg(short, long)]
        limits: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check {
            value,
            type_name,
            limits,
            verbose,
        } => run_check(&value, &type_name, limits.as_deref(), verbose),
        Commands::Ask {
            question,
            type_name,
            limits,
        } => run_ask(&question, &type_name, limits.as_deref()),
    };

    process::exit(exit_code);
}

/// Loads a limits file: a JSON array of limit objects.
fn load_limits(path: &Path) -> Result<Vec<Limit>, i32> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        eprintln!("Error: failed to read limits file '{}': {}", path.display(), e);
        3
    })?;
    serde_json::from_str(&text).map_err(|e| {
        eprintln!("Error: invalid limits file '{}': {}", path.display(), e);
        1
    })
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 = limits met, 1 = usage error, 2 = check
/// failure, 3 = I/O error.
fn run_check(value_text: &str, type_name: &str, limits_path: Option<&Path>, verbose: bool) -> i32 {
    let types = TypeNameRegistry::new();
    let comparators = ComparatorRegistry::new();

    let coerce = match types.resolve(type_name) {
        Some(c) => c,
        None => {
            eprintln!(
                "Error: unknown type name '{}', expected one of: {}",
                type_name,
                types.names().join(", ")
            );
            return 1;
        }
    };

    let candidate = match coerce(value_text) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: cannot coerce '{}' to {}: {}", value_text, type_name, e);
            return 1;
        }
    };

    let limits = match limits_path {
        Some(path) => match load_limits(path) {
            Ok(l) => l,
            Err(code) => return code,
        },
        None => Vec::new(),
    };

    match check_limits(&candidate, &limits, &comparators, verbose) {
        Ok(CheckOutcome::Passed) => {
            println!("All {} limit(s) met by {}.", limits.len(), candidate);
            0
        }
        Ok(CheckOutcome::Unsatisfied(matrix)) => {
            // Verbose mode: the matrix is the result, printed as JSON
            // for machine-readable output.
            let json = serde_json::to_string_pretty(&matrix).unwrap_or_else(|e| {
                format!("{{\"error\": \"failed to serialize matrix: {}\"}}", e)
            });
            println!("{}", json);
            2
        }
        Err(err) => {
            // TypeIncompatible and LimitsNotMet both carry the full
            // multi-line report in their display.
            eprintln!("{}", err);
            2
        }
    }
}

/// Execute the ask subcommand over real stdin/stdout.
///
/// Returns exit code: 0 = answer accepted, 1 = usage error, 2 = check
/// failure, 3 = I/O error.
fn run_ask(question: &str, type_name: &str, limits_path: Option<&Path>) -> i32 {
    let types = TypeNameRegistry::new();
    let comparators = ComparatorRegistry::new();

    let limits = match limits_path {
        Some(path) => match load_limits(path) {
            Ok(l) => Some(l),
            Err(code) => return code,
        },
        None => None,
    };

    let stdin = io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut output = io::stdout();

    match ask_user(
        &mut input,
        &mut output,
        question,
        type_name,
        limits.as_deref(),
        &types,
        &comparators,
    ) {
        Ok(answer) => {
            println!("The answer you gave was: {} ({})", answer, answer.type_name());
            0
        }
        Err(err @ AskError::UnknownTypeName { .. })
        | Err(err @ AskError::DuplicateTypeName { .. })
        | Err(err @ AskError::CoercionType { .. }) => {
            eprintln!("Error: {}", err);
            1
        }
        Err(AskError::Check(err)) => {
            eprintln!("{}", err);
            2
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            3
        }
    }
}
