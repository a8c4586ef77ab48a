//! Remap's main application entry point and orchestration logic.
//! Parses command-line arguments, loads the template and value files,
//! applies the mapping and writes the result out.

use std::path::Path;

use remap::{
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    loader::{load_rules, load_value},
    template::Template,
};
use serde_json::{Map, Value};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let base_path = std::env::current_dir().unwrap_or_default();
    let abs_path = if dest_path.is_absolute() {
        dest_path.to_path_buf()
    } else {
        base_path.join(dest_path)
    };

    if let Some(parent) = abs_path.parent() {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    std::fs::write(abs_path, content).map_err(Error::IoError)
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the template rule file
/// 2. Loads the source value file
/// 3. Loads the pre-existing target file, or starts from an empty object
/// 4. Parses and applies the template
/// 5. Writes the result to the output file or stdout
fn run(args: Args) -> Result<()> {
    let rules = load_rules(&args.template)?;
    let source = load_value(&args.source)?;

    let mut target = match &args.target {
        Some(path) => load_value(path)?,
        None => Value::Object(Map::new()),
    };

    let template = Template::parse(&rules)?.with_max_depth(args.max_depth);
    template.apply_into(&source, &mut target)?;

    let rendered = if args.compact {
        serde_json::to_string(&target)?
    } else {
        serde_json::to_string_pretty(&target)?
    };

    match &args.output {
        Some(path) => write_file(&rendered, path),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}
