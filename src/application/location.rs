use super::Request;
use crate::path::{dirname, normalize, resolve};
use crate::search::{SearchMap, SearchResult, parse_url_search};
use serde_json::Value;

/// Current path and search of a navigating client.
#[derive(Debug, Clone)]
pub struct Location {
    path: String,
    search: SearchMap,
}

impl Location {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            search: SearchMap::new(),
        }
    }

    /// Reads a `path?search#fragment` reference; the fragment is discarded.
    pub fn parse(href: &str) -> SearchResult<Self> {
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        let (path, search) = href.split_once('?').unwrap_or((href, ""));
        let path = if path.is_empty() {
            "/".to_string()
        } else {
            normalize(path)
        };
        Ok(Self {
            path,
            search: parse_url_search(search)?,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn search(&self) -> &SearchMap {
        &self.search
    }

    /// Moves to `target`, resolved against the directory of the current path,
    /// and returns the request that renders it with state preserved.
    pub fn open(&mut self, target: &str, search: Option<SearchMap>) -> Request {
        self.path = resolve([dirname(&self.path).as_str(), target]);
        self.search = search.unwrap_or_default();
        tracing::event!(tracing::Level::DEBUG, operation = "open", path = %self.path);
        self.to_request(true)
    }

    /// Request that re-renders the current location without pushing state.
    pub fn reload(&self) -> Request {
        self.to_request(false)
    }

    pub fn to_request(&self, state: bool) -> Request {
        let mut request = Request::new(self.path.clone()).with_search(self.search.clone());
        request
            .environment
            .local
            .insert("state".to_string(), Value::Bool(state));
        request
    }
}
