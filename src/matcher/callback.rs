use super::Match;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;
pub type HandlerResult<T = ()> = Result<T, HandlerError>;

type SyncFn<D> = dyn Fn(&mut Match<D>) -> HandlerResult + Send + Sync;

/// Asynchronous route callback.
pub trait MatchHandler<D>: Send + Sync {
    fn call<'a>(&'a self, matched: &'a mut Match<D>) -> BoxFuture<'a, HandlerResult>;
}

impl<D, F> MatchHandler<D> for F
where
    F: for<'a> Fn(&'a mut Match<D>) -> BoxFuture<'a, HandlerResult> + Send + Sync,
{
    fn call<'a>(&'a self, matched: &'a mut Match<D>) -> BoxFuture<'a, HandlerResult> {
        self(matched)
    }
}

/// Callback registered with a route and queued on every match it takes part in.
pub enum Callback<D> {
    Sync(Arc<SyncFn<D>>),
    Async(Arc<dyn MatchHandler<D>>),
}

impl<D> Callback<D> {
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&mut Match<D>) -> HandlerResult + Send + Sync + 'static,
    {
        Callback::Sync(Arc::new(f))
    }

    pub fn handler<H>(handler: H) -> Self
    where
        H: MatchHandler<D> + 'static,
    {
        Callback::Async(Arc::new(handler))
    }

    pub(crate) fn invoke_sync(&self, matched: &mut Match<D>) -> HandlerResult {
        match self {
            Callback::Sync(f) => f(matched),
            // polled once; a handler still pending after that is dropped
            Callback::Async(handler) => handler.call(matched).now_or_never().unwrap_or(Ok(())),
        }
    }

    pub(crate) async fn invoke(&self, matched: &mut Match<D>) -> HandlerResult {
        match self {
            Callback::Sync(f) => f(matched),
            Callback::Async(handler) => handler.call(matched).await,
        }
    }
}

impl<D> Clone for Callback<D> {
    fn clone(&self) -> Self {
        match self {
            Callback::Sync(f) => Callback::Sync(Arc::clone(f)),
            Callback::Async(handler) => Callback::Async(Arc::clone(handler)),
        }
    }
}

impl<D> fmt::Debug for Callback<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Sync(_) => f.write_str("Callback::Sync"),
            Callback::Async(_) => f.write_str("Callback::Async"),
        }
    }
}
