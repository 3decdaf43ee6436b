//! Base/head reference resolution.
//!
//! Pull requests compare branch refs and need owner qualification when the
//! head branch lives in a fork; pushes compare the raw before/after SHAs
//! and are never qualified.

use crate::error::{RunError, RunResult};
use changed_files_core::event::{Repo, TriggerEvent};
use tracing::info;

/// Resolves the `base...head` expression for the compare call.
pub fn resolve_basehead(event: &TriggerEvent, repo: &Repo) -> RunResult<String> {
    let (base, head, base_prefix, head_prefix) = match event {
        TriggerEvent::PullRequest(pr) => {
            let base = pr.base.as_ref().and_then(|b| b.git_ref.clone());
            let head = pr.head.git_ref.clone();

            // In-network pull requests use plain refs; a head from another
            // owner or repo needs owner-qualified refs on both sides.
            let head_owner = pr
                .head
                .repo
                .owner
                .login
                .as_deref()
                .or(pr.head.repo.owner.name.as_deref());
            let Some(head_owner) = head_owner else {
                return Err(RunError::UnknownHeadOwner {
                    head: head.unwrap_or_default(),
                });
            };

            if !head_owner.eq_ignore_ascii_case(&repo.owner)
                || !pr.head.repo.name.eq_ignore_ascii_case(&repo.repo)
            {
                (
                    base,
                    head,
                    format!("{}:", repo.owner),
                    format!("{head_owner}:"),
                )
            } else {
                (base, head, String::new(), String::new())
            }
        }
        TriggerEvent::Push(push) => (
            push.before.clone(),
            push.after.clone(),
            String::new(),
            String::new(),
        ),
        TriggerEvent::Other(kind) => {
            return Err(RunError::UnsupportedEvent(kind.clone()));
        }
    };

    // Applies to every event kind: both refs must have resolved.
    let (Some(base), Some(head)) = (base, head) else {
        return Err(RunError::MissingRefs {
            event: event.kind_name().to_string(),
        });
    };
    if base.is_empty() || head.is_empty() {
        return Err(RunError::MissingRefs {
            event: event.kind_name().to_string(),
        });
    }

    info!("Base commit: {base}");
    info!("Head commit: {head}");

    Ok(format!("{base_prefix}{base}...{head_prefix}{head}"))
}
