//! GitHub commit-comparison client.
//!
//! One capability: compare a `base...head` expression and return the
//! status code, the ahead/behind relationship, and the changed files.
//! The `CompareApi` trait is the seam the pipeline (and its tests) sit on;
//! `GithubClient` is the real implementation over the REST v3 compare
//! endpoint.

use anyhow::{Context, Result};
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

/// One page of the compare-two-commits call.
///
/// Pagination bypasses the large-commit limitation, but all files are
/// only returned on the first page, so a single page of 250 is enough.
#[derive(Debug, Clone, Serialize)]
pub struct CompareRequest {
    pub owner: String,
    pub repo: String,
    pub basehead: String,
    pub per_page: u32,
    pub page: u32,
}

impl CompareRequest {
    pub fn new(owner: &str, repo: &str, basehead: String) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            basehead,
            per_page: 250,
            page: 1,
        }
    }
}

/// A file entry in the comparison, exactly as the API reports it. The
/// status is kept as the wire string; the classifier owns validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
    pub status: String,
}

impl ChangedFile {
    pub fn new(filename: &str, status: &str) -> Self {
        Self {
            filename: filename.to_string(),
            status: status.to_string(),
        }
    }
}

/// Comparison body: `status` is the commit-graph relationship of head to
/// base (`ahead`, `behind`, `diverged` or `identical`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareData {
    pub status: Option<String>,
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

#[derive(Debug, Clone)]
pub struct CompareResponse {
    pub status: u16,
    pub data: CompareData,
}

/// The comparison capability. Implemented by `GithubClient` for real runs
/// and by stubs in tests.
#[allow(async_fn_in_trait)]
pub trait CompareApi {
    async fn compare_basehead(&self, request: &CompareRequest) -> Result<CompareResponse>;
}

/// REST client for the compare endpoint.
pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
}

impl GithubClient {
    pub fn new(api_url: &str, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("the provided token is not a valid header value")?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .user_agent(concat!("changed-files/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .context("failed to build the GitHub HTTP client")?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

impl CompareApi for GithubClient {
    async fn compare_basehead(&self, request: &CompareRequest) -> Result<CompareResponse> {
        let url = format!(
            "{}/repos/{}/{}/compare/{}",
            self.api_url, request.owner, request.repo, request.basehead
        );
        tracing::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .query(&[("per_page", request.per_page), ("page", request.page)])
            .send()
            .await
            .context("the compare request to the GitHub API failed")?;

        let status = response.status().as_u16();
        // Non-200 bodies are error documents; the pipeline only needs the
        // code to reject them, so don't try to parse a comparison out.
        let data = if status == 200 {
            response
                .json()
                .await
                .context("could not decode the compare response body")?
        } else {
            CompareData::default()
        };

        Ok(CompareResponse { status, data })
    }
}
