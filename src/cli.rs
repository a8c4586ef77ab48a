//! Command-line interface implementation for remap.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::DEFAULT_MAX_DEPTH;

/// Command-line arguments structure for remap.
#[derive(Parser, Debug)]
#[command(author, version, about = "remap: declarative object-to-object mapping tool", long_about = None)]
pub struct Args {
    /// Path to the template rule file (JSON or YAML)
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Path to the source value file (JSON or YAML)
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Pre-existing target file to merge the result into
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(short, long)]
    pub compact: bool,

    /// Maximum source nesting depth accepted while flattening
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
