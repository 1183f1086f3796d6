mod error;
mod handler;
mod location;
mod logger;
mod request;
mod service;

pub use error::{ApplicationError, ApplicationResult};
pub use handler::{Action, Filter, Processor};
pub use location::Location;
pub use logger::{Lifecycle, Logger, RequestPhase, TracingLogger};
pub use request::{Environment, Input, Request, RequestError, SharedRequest};
pub use service::Application;
