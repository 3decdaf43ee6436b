use thiserror::Error;

/// Every way a run can fail. All of these are terminal: the pipeline
/// stops at the first one and no outputs are written.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Format must be one of 'space-delimited', 'csv', or 'json', got '{0}'.")]
    UnsupportedFormat(String),

    #[error("This action only supports pull requests and pushes, {0} events are not supported.")]
    UnsupportedEvent(String),

    #[error("Could not find the owner name of the head '{head}'.")]
    UnknownHeadOwner { head: String },

    #[error("The base and head commits are missing from the payload for this {event} event.")]
    MissingRefs { event: String },

    #[error("The GitHub API for comparing the base and head commits for this {event} event returned {status}, expected 200.")]
    CompareStatus { event: String, status: u16 },

    #[error("The head commit for this {event} event is not ahead of the base commit. Please ensure your changes are on top of the base branch so that comparison is accurate.")]
    HeadNotAhead { event: String },

    #[error("One of your files includes a space ({0}). Consider using a different output format or removing spaces from your filenames.")]
    SpaceInFilename(String),

    #[error("One of your files includes an unsupported file status '{status}' for '{filename}', expected 'added', 'modified', 'removed', or 'renamed'.")]
    UnknownFileStatus { status: String, filename: String },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type RunResult<T> = Result<T, RunError>;
