use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("malformed percent escape at index {index} in '{input}'")]
    MalformedEscape { input: String, index: usize },
    #[error("percent-decoded component '{input}' is not valid UTF-8")]
    InvalidUtf8 { input: String },
}

pub type SearchResult<T> = Result<T, SearchError>;
