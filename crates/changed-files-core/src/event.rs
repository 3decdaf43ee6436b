//! Trigger-event payload model.
//!
//! The workflow runner hands us an event name and a JSON payload file.
//! Only the fields this action reads are modeled; everything else in the
//! payload is ignored during deserialization.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// The repository the action is running against, from `GITHUB_REPOSITORY`.
#[derive(Debug, Clone)]
pub struct Repo {
    pub owner: String,
    pub repo: String,
}

impl Repo {
    /// Parses an `owner/name` slug.
    pub fn parse(slug: &str) -> Result<Self> {
        let (owner, repo) = slug
            .split_once('/')
            .ok_or_else(|| anyhow!("Repository slug '{slug}' is not of the form 'owner/name'"))?;
        if owner.is_empty() || repo.is_empty() {
            return Err(anyhow!(
                "Repository slug '{slug}' is not of the form 'owner/name'"
            ));
        }
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

/// The triggering event, resolved once from the event name and payload.
///
/// Only pull requests and pushes carry enough information to compare
/// commits; everything else is kept as `Other` so the pipeline can name
/// the unsupported kind when it rejects it.
#[derive(Debug, Clone)]
pub enum TriggerEvent {
    PullRequest(PullRequestEvent),
    Push(PushEvent),
    Other(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    pub base: Option<BaseRef>,
    pub head: HeadRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseRef {
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadRef {
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    pub repo: HeadRepo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadRepo {
    pub name: String,
    pub owner: RepoOwner,
}

/// Head repository owner. Fork payloads populate `login`; `name` is a
/// display-style fallback some payload shapes carry instead.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub login: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushEvent {
    pub before: Option<String>,
    pub after: Option<String>,
}

impl TriggerEvent {
    /// Builds the event model from the webhook payload JSON.
    pub fn from_payload(event_name: &str, payload: &Value) -> Result<Self> {
        match event_name {
            "pull_request" => {
                let pull_request = payload
                    .get("pull_request")
                    .ok_or_else(|| anyhow!("pull_request event payload has no pull_request"))?;
                let event = serde_json::from_value(pull_request.clone())
                    .context("malformed pull_request payload")?;
                Ok(Self::PullRequest(event))
            }
            "push" => {
                let event =
                    serde_json::from_value(payload.clone()).context("malformed push payload")?;
                Ok(Self::Push(event))
            }
            other => Ok(Self::Other(other.to_string())),
        }
    }

    /// The workflow event name this variant was built from.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::PullRequest(_) => "pull_request",
            Self::Push(_) => "push",
            Self::Other(name) => name,
        }
    }
}
