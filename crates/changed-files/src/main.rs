use anyhow::Context;
use changed_files::cli::Cli;
use changed_files::pipeline::{self, RunOptions};
use changed_files_core::event::{Repo, TriggerEvent};
use changed_files_core::outputs::GithubOutput;
use changed_files_core::{logging, set_failed};
use changed_files_github::GithubClient;
use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init();

    // One failure report, no matter where the run stopped.
    if let Err(e) = run(cli).await {
        set_failed(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&cli.event_path)
        .with_context(|| format!("could not read the event payload at {:?}", cli.event_path))?;
    let payload: serde_json::Value =
        serde_json::from_str(&raw).context("the event payload is not valid JSON")?;

    if let Some(object) = payload.as_object() {
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        debug!("Payload keys: {}", keys.join(", "));
    }

    let event = TriggerEvent::from_payload(&cli.event_name, &payload)?;
    let repo = Repo::parse(&cli.repository)?;

    let client = GithubClient::new(&cli.api_url, &cli.token)?;
    let mut sink = GithubOutput::from_env()?;
    let options = RunOptions {
        format: cli.format,
        filter: cli.filter,
    };

    pipeline::run(&event, &repo, &options, &client, &mut sink).await?;
    Ok(())
}
