//! tijson CLI.
//!
//! Validates and reformats JSON documents read from a file or stdin.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use tijson::{parse_with_limits, ErrorCode, Limits, Value};

#[derive(Parser)]
#[command(name = "tijson")]
#[command(about = "Strict JSON validator and formatter", long_about = None)]
#[command(version)]
struct Cli {
    /// Maximum array/object nesting depth
    #[arg(long, global = true)]
    depth: Option<u64>,

    /// Allow deeper nesting for trusted documents
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the input is a single valid JSON document
    Check {
        /// Input file (stdin if omitted)
        path: Option<PathBuf>,
    },

    /// Print the input in compact canonical form
    Format {
        /// Input file (stdin if omitted)
        path: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn read_input(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn limits(cli: &Cli) -> Limits {
    let base = if cli.lenient {
        Limits::lenient()
    } else {
        Limits::strict()
    };
    match cli.depth {
        Some(depth) => base.with_max_nesting_depth(depth),
        None => base,
    }
}

fn load(path: Option<&PathBuf>, limits: Limits) -> Result<Value, ExitCode> {
    let text = read_input(path).map_err(|e| {
        eprintln!("error: cannot read input: {}", e);
        ExitCode::from(2)
    })?;
    parse_with_limits(&text, limits).map_err(|e: ErrorCode| {
        eprintln!("error: {} (code {})", e, e.code());
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let limits = limits(&cli);

    match &cli.command {
        Some(Commands::Check { path }) => match load(path.as_ref(), limits) {
            Ok(_) => {
                println!("ok");
                ExitCode::SUCCESS
            }
            Err(code) => code,
        },
        Some(Commands::Format { path }) => match load(path.as_ref(), limits) {
            Ok(value) => {
                println!("{}", value.stringify());
                ExitCode::SUCCESS
            }
            Err(code) => code,
        },
        Some(Commands::Version) | None => {
            println!("tijson v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}
