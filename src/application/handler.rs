use super::SharedRequest;
use super::logger::{LoggerSet, RequestPhase};
use crate::matcher::{Callback, HandlerError, HandlerResult, Match, MatchHandler};
use crate::router::Route;
use crate::types::Variables;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::Arc;

/// Decides whether a request may continue to its processors.
pub trait Filter: Send + Sync {
    fn filter<'a>(&'a self, matched: &'a mut Match<SharedRequest>)
    -> BoxFuture<'a, HandlerResult<bool>>;
}

/// Handles a request whose filters granted it.
pub trait Processor: Send + Sync {
    fn process<'a>(&'a self, matched: &'a mut Match<SharedRequest>) -> BoxFuture<'a, HandlerResult>;
}

/// Route settings of a filter or processor.
#[derive(Debug, Clone, Default)]
pub struct Action {
    pub path: String,
    pub constraint: HashMap<String, String>,
    /// Falls back to the registration's default when unset.
    pub exact: Option<bool>,
    pub environment: Variables,
}

impl Action {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn constraint<N, P>(mut self, name: N, pattern: P) -> Self
    where
        N: Into<String>,
        P: Into<String>,
    {
        self.constraint.insert(name.into(), pattern.into());
        self
    }

    pub fn exact(mut self, value: bool) -> Self {
        self.exact = Some(value);
        self
    }

    pub fn environment(mut self, environment: Variables) -> Self {
        self.environment = environment;
        self
    }

    pub(crate) fn into_route(
        self,
        default_exact: bool,
        callback: Callback<SharedRequest>,
    ) -> Route<SharedRequest> {
        Route::new(self.path, callback)
            .constraints(self.constraint)
            .exact(self.exact.unwrap_or(default_exact))
            .environment(self.environment)
    }
}

/// Stores `err` on the request and reports it to the loggers.
pub(crate) fn record_failure(request: &SharedRequest, err: HandlerError, loggers: &LoggerSet) {
    let snapshot = {
        let mut guard = request.lock();
        guard.error = Some(Arc::from(err));
        guard.clone()
    };
    loggers.notify_request(RequestPhase::Error, &snapshot);
}

pub(crate) struct FilterHandler {
    pub(crate) filter: Arc<dyn Filter>,
}

impl MatchHandler<SharedRequest> for FilterHandler {
    fn call<'a>(&'a self, matched: &'a mut Match<SharedRequest>) -> BoxFuture<'a, HandlerResult> {
        Box::pin(async move {
            let allows = self.filter.filter(matched).await?;
            matched.detail().lock().granted = allows;
            Ok(())
        })
    }
}

pub(crate) struct ProcessorHandler {
    pub(crate) processor: Arc<dyn Processor>,
}

impl MatchHandler<SharedRequest> for ProcessorHandler {
    fn call<'a>(&'a self, matched: &'a mut Match<SharedRequest>) -> BoxFuture<'a, HandlerResult> {
        self.processor.process(matched)
    }
}
