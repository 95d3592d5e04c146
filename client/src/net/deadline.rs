//! Client-side deadline for outbound analysis calls.
//!
//! The analysis service gives up on its own work after 30 seconds; the client
//! waits a little longer so a server-side timeout still reaches the user as a
//! normal error response instead of a cancelled request.

#[cfg(test)]
#[path = "deadline_test.rs"]
mod deadline_test;

use std::time::Duration;

/// Hard limit on a single analysis call.
pub const ANALYSIS_DEADLINE: Duration = Duration::from_secs(35);

/// Race `work` against `deadline`.
///
/// Returns `Some(output)` if `work` settles first and `None` if the deadline
/// fires first. The losing future is dropped; callers that hold an abort
/// handle for `work` must trigger it on `None`.
#[cfg(any(test, feature = "hydrate"))]
pub async fn race_deadline<T, W, D>(work: W, deadline: D) -> Option<T>
where
    W: Future<Output = T>,
    D: Future<Output = ()>,
{
    use futures::future::{Either, select};

    let work = std::pin::pin!(work);
    let deadline = std::pin::pin!(deadline);
    match select(work, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}
