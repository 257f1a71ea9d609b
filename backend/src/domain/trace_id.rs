//! Correlation identifier for a single HTTP request.
//!
//! The [`Trace`](crate::Trace) middleware mints one identifier per request and
//! runs the rest of the pipeline inside [`TraceId::in_scope`]. Anything built
//! while the greeting handler runs, such as an [`Error`](crate::domain::Error)
//! payload, can then pick it up through [`TraceId::current`]. Spawned tasks
//! start outside the scope and see no identifier.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static CURRENT: TraceId;
}

/// UUID tagging one request, echoed in the `trace-id` response header.
///
/// # Examples
/// ```
/// use hello_backend::domain::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let id: TraceId = "6f1c2b8e-0d4a-4b3f-9a57-2c1d0e9f8a41".parse().expect("uuid");
/// assert_eq!(id.in_scope(async { TraceId::current() }).await, Some(id));
/// assert_eq!(TraceId::current(), None);
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request being served, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with this identifier as the current one.
    pub fn in_scope<F>(self, fut: F) -> impl Future<Output = F::Output>
    where
        F: Future,
    {
        CURRENT.scope(self, fut)
    }
}

impl From<Uuid> for TraceId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn generated_ids_are_distinct_v4_uuids() {
        let first = TraceId::generate();
        let second = TraceId::generate();
        assert_ne!(first, second);
        let parsed = Uuid::parse_str(&first.to_string()).expect("hyphenated uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[rstest]
    #[tokio::test]
    async fn nested_scope_shadows_then_restores_outer_id() {
        let outer = TraceId::from(Uuid::nil());
        let inner = TraceId::generate();
        let (seen_inner, seen_outer) = outer
            .in_scope(async move {
                let seen_inner = inner.in_scope(async { TraceId::current() }).await;
                (seen_inner, TraceId::current())
            })
            .await;
        assert_eq!(seen_inner, Some(inner));
        assert_eq!(seen_outer, Some(outer));
    }

    #[rstest]
    #[tokio::test]
    async fn spawned_tasks_do_not_inherit_the_id() {
        let id = TraceId::generate();
        let spawned = id
            .in_scope(async { tokio::spawn(async { TraceId::current() }).await })
            .await
            .expect("spawned task");
        assert_eq!(spawned, None);
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    fn malformed_header_values_do_not_parse(#[case] raw: &str) {
        assert!(raw.parse::<TraceId>().is_err());
    }
}
