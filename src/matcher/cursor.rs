use super::{Callback, HandlerResult};
use crate::pipeline::Subject;
use crate::types::Variables;
use std::collections::VecDeque;
use std::fmt;

/// Pipeline of callbacks selected by one `Router::match_path` call.
///
/// Callbacks are consumed front to back, each at most once. The variables
/// reported by [`Match::variables`] always belong to the callback that runs
/// next, so a callback reads its own captures while it is being notified.
pub struct Match<D> {
    path: String,
    remaining: String,
    events: Subject<Callback<D>>,
    variables: VecDeque<Variables>,
    current: Option<Variables>,
    detail: D,
}

impl<D> Match<D> {
    pub(crate) fn new(
        path: String,
        remaining: String,
        mut variables: VecDeque<Variables>,
        detail: D,
        events: Subject<Callback<D>>,
    ) -> Self {
        let current = variables.pop_front();
        Self {
            path,
            remaining,
            events,
            variables,
            current,
            detail,
        }
    }

    /// Callbacks not yet notified.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumed prefix of the queried path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Unconsumed suffix of the queried path.
    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    /// True when the trie walk consumed the whole queried path.
    pub fn exact(&self) -> bool {
        self.remaining.is_empty()
    }

    pub fn variables(&self) -> Variables {
        self.current.clone().unwrap_or_default()
    }

    pub fn variable(&self, name: &str) -> Option<&serde_json::Value> {
        self.current.as_ref().and_then(|vars| vars.get(name))
    }

    pub fn detail(&self) -> &D {
        &self.detail
    }

    pub fn detail_mut(&mut self) -> &mut D {
        &mut self.detail
    }

    pub fn into_detail(self) -> D {
        self.detail
    }

    /// Notifies the next callback without awaiting it.
    ///
    /// Asynchronous handlers reached this way are polled once: one that
    /// completes immediately takes effect and its error propagates, one that
    /// is still pending is dropped.
    pub fn next_sync(&mut self) -> HandlerResult<&mut Self> {
        let Some(callback) = self.events.shift() else {
            return Ok(self);
        };
        let outcome = callback.invoke_sync(self);
        self.advance();
        outcome?;
        Ok(self)
    }

    /// Notifies the next callback, awaiting asynchronous handlers.
    pub async fn next(&mut self) -> HandlerResult<&mut Self> {
        let Some(callback) = self.events.shift() else {
            return Ok(self);
        };
        let outcome = callback.invoke(self).await;
        self.advance();
        outcome?;
        Ok(self)
    }

    fn advance(&mut self) {
        self.current = self.variables.pop_front();
    }
}

impl<D: fmt::Debug> fmt::Debug for Match<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("path", &self.path)
            .field("remaining", &self.remaining)
            .field("pending", &self.events.len())
            .field("variables", &self.current)
            .field("detail", &self.detail)
            .finish()
    }
}
