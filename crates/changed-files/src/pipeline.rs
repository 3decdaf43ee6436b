//! The single run through the pipeline: validate the format, resolve the
//! base/head refs, fetch and check the comparison, classify the files,
//! and emit the result sets.

use crate::classify;
use crate::error::{RunError, RunResult};
use crate::format::{self, OutputFormat};
use crate::resolve;
use changed_files_core::event::{Repo, TriggerEvent};
use changed_files_core::outputs::OutputSink;
use changed_files_github::{CompareApi, CompareRequest};
use tracing::debug;

/// The action inputs the pipeline consumes. `format` stays a raw string
/// here because validating it is the pipeline's first stage.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub format: String,
    pub filter: Option<String>,
}

/// Runs the whole pipeline once. Any error is terminal: the caller reports
/// it and nothing has been written to the sink.
pub async fn run<C: CompareApi>(
    event: &TriggerEvent,
    repo: &Repo,
    options: &RunOptions,
    client: &C,
    sink: &mut dyn OutputSink,
) -> RunResult<()> {
    // Validate the format before touching the network.
    let format = OutputFormat::parse(&options.format)?;

    let basehead = resolve::resolve_basehead(event, repo)?;

    let request = CompareRequest::new(&repo.owner, &repo.repo, basehead);
    debug!(
        "Compare payload {}",
        serde_json::to_string(&request).map_err(anyhow::Error::from)?
    );

    let response = client.compare_basehead(&request).await?;
    if response.status != 200 {
        return Err(RunError::CompareStatus {
            event: event.kind_name().to_string(),
            status: response.status,
        });
    }
    if response.data.status.as_deref() != Some("ahead") {
        return Err(RunError::HeadNotAhead {
            event: event.kind_name().to_string(),
        });
    }

    let mut files = response.data.files;
    if let Some(filter) = options.filter.as_deref() {
        files = classify::apply_filter(files, filter)?;
    }
    let sets = classify::classify(&files, format)?;

    format::emit(sink, &sets, format)
}
