use clap::Parser;

/// Command-line arguments for the `volley` binary.
#[derive(Debug, Parser)]
#[command(
    name = "volley",
    version,
    about = "Run a suite of concurrent HTTP load tests described by a JSON file."
)]
pub struct CliArgs {
    /// Path to the JSON suite file. Falls back to `volley.json` in the
    /// working directory when omitted.
    pub suite: Option<String>,

    /// Path the JSON report is written to.
    #[arg(short, long, default_value = "results.json")]
    pub output: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}
