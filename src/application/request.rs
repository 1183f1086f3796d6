use crate::search::SearchMap;
use crate::types::Variables;
use parking_lot::Mutex;
use std::sync::Arc;

/// Request detail shared by every filter and processor of one dispatch.
pub type SharedRequest = Arc<Mutex<Request>>;

pub type RequestError = Arc<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Default)]
pub struct Input {
    pub search: SearchMap,
}

#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Per-callback variables, rewritten around every notification.
    pub local: Variables,
    pub shared: Variables,
}

#[derive(Debug, Clone)]
pub struct Request {
    pub path: String,
    pub input: Input,
    pub output: Variables,
    pub environment: Environment,
    /// Cleared by a filter that denies the request.
    pub granted: bool,
    /// Last handler failure recorded during dispatch.
    pub error: Option<RequestError>,
}

impl Request {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            input: Input::default(),
            output: Variables::new(),
            environment: Environment::default(),
            granted: true,
            error: None,
        }
    }

    pub fn with_search(mut self, search: SearchMap) -> Self {
        self.input.search = search;
        self
    }

    pub fn with_local(mut self, local: Variables) -> Self {
        self.environment.local = local;
        self
    }

    pub fn into_shared(self) -> SharedRequest {
        Arc::new(Mutex::new(self))
    }
}
