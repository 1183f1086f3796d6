mod errors;
mod options;
mod route;
mod service;

pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_SEPARATOR, DEFAULT_VARIABLE_PATTERN, RouterOptions, RouterOptionsBuilder,
    RouterOptionsError,
};
pub use route::Route;
pub use service::Router;
