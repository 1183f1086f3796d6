use super::Request;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Receive,
    Process,
    Send,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Start,
    Stop,
}

/// Observer of application lifecycle and request phases. Every hook receives
/// a snapshot, never the live request.
pub trait Logger: Send + Sync {
    fn on_start(&self) {}
    fn on_stop(&self) {}
    fn on_receive(&self, _request: &Request) {}
    fn on_process(&self, _request: &Request) {}
    fn on_send(&self, _request: &Request) {}
    fn on_error(&self, _request: &Request) {}
}

/// Logger forwarding every notification to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn on_start(&self) {
        tracing::event!(tracing::Level::INFO, action = "start");
    }

    fn on_stop(&self) {
        tracing::event!(tracing::Level::INFO, action = "stop");
    }

    fn on_receive(&self, request: &Request) {
        tracing::event!(tracing::Level::DEBUG, phase = "receive", path = %request.path);
    }

    fn on_process(&self, request: &Request) {
        tracing::event!(
            tracing::Level::DEBUG,
            phase = "process",
            path = %request.path,
            granted = request.granted
        );
    }

    fn on_send(&self, request: &Request) {
        tracing::event!(tracing::Level::DEBUG, phase = "send", path = %request.path);
    }

    fn on_error(&self, request: &Request) {
        match request.error.as_ref() {
            Some(err) => {
                tracing::event!(tracing::Level::WARN, phase = "error", path = %request.path, error = %err)
            }
            None => tracing::event!(tracing::Level::WARN, phase = "error", path = %request.path),
        }
    }
}

/// Loggers registered on an application, shared with its route handlers.
#[derive(Clone, Default)]
pub(crate) struct LoggerSet {
    inner: Arc<RwLock<Vec<Arc<dyn Logger>>>>,
}

impl LoggerSet {
    pub(crate) fn push(&self, logger: Arc<dyn Logger>) {
        self.inner.write().push(logger);
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub(crate) fn notify_request(&self, phase: RequestPhase, request: &Request) {
        for logger in self.inner.read().iter() {
            match phase {
                RequestPhase::Receive => logger.on_receive(request),
                RequestPhase::Process => logger.on_process(request),
                RequestPhase::Send => logger.on_send(request),
                RequestPhase::Error => logger.on_error(request),
            }
        }
    }

    pub(crate) fn notify_lifecycle(&self, event: Lifecycle) {
        for logger in self.inner.read().iter() {
            match event {
                Lifecycle::Start => logger.on_start(),
                Lifecycle::Stop => logger.on_stop(),
            }
        }
    }
}

impl fmt::Debug for LoggerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerSet")
            .field("loggers", &self.len())
            .finish()
    }
}
