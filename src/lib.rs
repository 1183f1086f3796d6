pub mod application;
pub mod matcher;
pub mod path;
pub mod pipeline;
pub mod router;
pub mod search;
pub mod trie;
pub mod types;

pub use matcher::{Callback, HandlerError, HandlerResult, Match, MatchHandler};
pub use router::{
    Route, Router, RouterError, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
    RouterResult,
};
pub use types::Variables;
