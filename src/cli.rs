use clap::Parser;
use failing_assets::application::dto::ReportFormat;
use std::path::PathBuf;

/// Report failing assets and the assets downstream of them
#[derive(Parser, Debug)]
#[command(name = "failing-assets")]
#[command(version)]
#[command(
    about = "Report failing assets and the assets downstream of them",
    long_about = None
)]
pub struct Args {
    /// GraphQL endpoint of the asset orchestrator
    /// (default: http://localhost:3000/graphql)
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Path to a config file (defaults to ./failing-assets.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: text, markdown or json (default: text)
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base URL of the web UI, used to make asset links absolute
    #[arg(long = "ui-url", value_name = "URL")]
    pub ui_url: Option<String>,

    /// Number of asset keys per status request (1-100)
    #[arg(long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Exit with code 1 when at least one asset is failing
    #[arg(long)]
    pub fail_on_failing: bool,
}

impl Args {
    /// Parses arguments, returning clap's error instead of exiting
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
