use crate::matcher::Callback;
use crate::types::Variables;
use std::collections::HashMap;

/// A route registration consumed by `Router::add`.
#[derive(Debug)]
pub struct Route<D> {
    pub path: String,
    /// Constraint pattern for every `{name}` directory used in `path`.
    pub constraint: HashMap<String, String>,
    pub exact: bool,
    pub environment: Variables,
    pub on_match: Callback<D>,
}

impl<D> Route<D> {
    pub fn new<S: Into<String>>(path: S, on_match: Callback<D>) -> Self {
        Self {
            path: path.into(),
            constraint: HashMap::new(),
            exact: false,
            environment: Variables::new(),
            on_match,
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

    pub fn constraints(mut self, constraint: HashMap<String, String>) -> Self {
        self.constraint = constraint;
        self
    }

    pub fn exact(mut self, value: bool) -> Self {
        self.exact = value;
        self
    }

    pub fn environment(mut self, environment: Variables) -> Self {
        self.environment = environment;
        self
    }
}
