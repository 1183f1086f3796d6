mod callback;
mod cursor;

pub use callback::{Callback, HandlerError, HandlerResult, MatchHandler};
pub use cursor::Match;
