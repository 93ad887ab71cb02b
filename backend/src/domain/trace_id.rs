//! Per-request correlation identifier.
//!
//! The [`Trace`](crate::middleware::Trace) middleware opens a scope for every
//! request; anything running inside it (handlers, the error normaliser,
//! repository calls) can read the active id through [`TraceId::current`]
//! without threading it through arguments.
//!
//! Tokio task-locals do not follow `tokio::spawn`. Wrap spawned work in
//! [`TraceId::scope`] to keep the id.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the trace id back to the client.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// Correlation identifier for a single request.
///
/// # Examples
/// ```
/// use devcamper::TraceId;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let id = TraceId::from_uuid(uuid::Uuid::nil());
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Mint a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The id in scope for the running task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Run `fut` with `trace_id` in scope.
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scope_exposes_the_id() {
        let expected = TraceId::generate();
        let observed = TraceId::scope(expected, async { TraceId::current() }).await;
        assert_eq!(observed, Some(expected));
    }

    #[tokio::test]
    async fn no_id_outside_a_scope() {
        assert!(TraceId::current().is_none());
    }

    #[tokio::test]
    async fn spawned_tasks_need_an_explicit_scope() {
        let outer = TraceId::generate();
        let (lost, kept) = TraceId::scope(outer, async move {
            let lost = tokio::spawn(async { TraceId::current() })
                .await
                .expect("task completes");
            let kept = tokio::spawn(TraceId::scope(outer, async { TraceId::current() }))
                .await
                .expect("task completes");
            (lost, kept)
        })
        .await;
        assert_eq!(lost, None);
        assert_eq!(kept, Some(outer));
    }

    #[test]
    fn display_and_parse_agree() {
        let id = TraceId::from_uuid(Uuid::nil());
        let parsed: TraceId = id.to_string().parse().expect("valid uuid");
        assert_eq!(parsed, id);
        assert_eq!(parsed.as_uuid(), &Uuid::nil());
    }
}
