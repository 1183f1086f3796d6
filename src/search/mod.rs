mod decode;
mod error;
mod parse;

pub use decode::decode_component;
pub use error::{SearchError, SearchResult};
pub use parse::{SearchItem, SearchMap, SearchValue, parse_url_search};
