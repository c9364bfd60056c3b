//! Check files on disk against their extensions.
//!
//! ```text
//! cargo run --example validate_file -- uploads/*.jpg
//! cargo run --example validate_file -- --json --read-limit 131072 report.docx
//! ```
//!
//! Exits with status 1 if any file's content does not match its extension.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use extguard::{Validator, ValidatorOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Detect file content types and flag spoofed extensions")]
struct Args {
    /// Files to check
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Print one JSON object per file
    #[arg(long)]
    json: bool,

    /// Only accept exact extension matches
    #[arg(long)]
    strict: bool,

    /// Bytes to read from each file
    #[arg(long, default_value_t = extguard::validation::DEFAULT_READ_LIMIT)]
    read_limit: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = ValidatorOptions::new()
        .with_read_limit(args.read_limit)
        .with_strict(args.strict);
    let validator = match Validator::with_options(options) {
        Ok(validator) => validator,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        },
    };

    let mut all_valid = true;
    for path in &args.paths {
        match validator.validate_path(path) {
            Ok(result) => {
                all_valid &= result.is_valid;
                if args.json {
                    match serde_json::to_string(&result) {
                        Ok(line) => println!("{}", line),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                } else {
                    let verdict = if result.is_valid { "ok" } else { "MISMATCH" };
                    println!(
                        "{:<40} .{:<8} -> {:<10} {}",
                        path.display(),
                        result.extension,
                        result.actual_type,
                        verdict
                    );
                }
            },
            Err(e) => {
                all_valid = false;
                eprintln!("{}: {}", path.display(), e);
            },
        }
    }

    if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
