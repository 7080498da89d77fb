use std::path::{Path, PathBuf};

use clap::Parser;

use crate::args::CliArgs;
use crate::config::load_suite;
use crate::error::{AppError, AppResult, ConfigError};
use crate::logger;
use crate::report::save_report;
use crate::runner::run_suite;

/// Default suite filename checked when no path is provided.
const DEFAULT_SUITE_FILE: &str = "volley.json";

/// Binary entry point: parse arguments, run the suite, write the report.
///
/// # Errors
///
/// Returns an error when the suite file cannot be located, read, or parsed,
/// or when the report cannot be written. Failures inside individual tests
/// are contained by the runner and do not surface here.
pub fn run() -> AppResult<()> {
    let args = CliArgs::parse();
    logger::init_logging(args.verbose);

    let suite_path = resolve_suite_path(args.suite.as_deref())?;
    let specs = load_suite(&suite_path)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let summaries = runtime.block_on(run_suite(specs));

    for summary in &summaries {
        println!("{}", summary.console_line());
    }

    save_report(Path::new(&args.output), &summaries)?;
    println!("Results saved in {}", args.output);

    Ok(())
}

fn resolve_suite_path(arg: Option<&str>) -> AppResult<PathBuf> {
    if let Some(path) = arg {
        return Ok(PathBuf::from(path));
    }
    let default = PathBuf::from(DEFAULT_SUITE_FILE);
    if default.exists() {
        return Ok(default);
    }
    Err(AppError::config(ConfigError::SuiteFileMissing))
}
