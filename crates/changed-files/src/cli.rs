use clap::Parser;
use std::path::PathBuf;

/// Emits the files changed between the base and head commits of the
/// triggering pull request or push as step outputs.
///
/// Every flag is also readable from the environment the runner provides,
/// so the action invocation usually passes no arguments at all.
#[derive(Debug, Parser)]
#[command(name = "changed-files", version)]
pub struct Cli {
    /// Output format: space-delimited, csv, or json
    #[arg(long, env = "INPUT_FORMAT")]
    pub format: String,

    /// Comma-separated globs; only matching files are emitted
    #[arg(long, env = "INPUT_FILTER")]
    pub filter: Option<String>,

    /// Token used to call the GitHub API
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Name of the event that triggered the workflow
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: String,

    /// Path to the JSON file holding the event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// Repository the workflow runs against, as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Base URL of the GitHub API
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_url: String,
}
