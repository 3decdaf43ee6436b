//! Step outputs and failure reporting for the workflow runner.

use anyhow::{anyhow, ensure, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Where formatted results are written. The pipeline only ever appends
/// string-valued keys; swapping the sink out keeps tests off the real
/// `GITHUB_OUTPUT` file.
pub trait OutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Appends outputs to the file named by `GITHUB_OUTPUT` using the runner's
/// heredoc record format, so values may contain any character.
#[derive(Debug)]
pub struct GithubOutput {
    path: PathBuf,
}

impl GithubOutput {
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os("GITHUB_OUTPUT")
            .ok_or_else(|| anyhow!("GITHUB_OUTPUT is not set; are we running on a runner?"))?;
        Ok(Self { path: path.into() })
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for GithubOutput {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        ensure!(
            !value.contains(&delimiter) && !name.contains(&delimiter),
            "output '{name}' collides with its heredoc delimiter"
        );
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n")?;
        Ok(())
    }
}

/// Reports a terminal failure to the runner via the `::error::` workflow
/// command. The caller is responsible for the non-zero exit code.
pub fn set_failed(message: &str) {
    println!("::error::{}", escape_command_data(message));
}

// Workflow command data must have %, CR and LF percent-escaped.
fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
