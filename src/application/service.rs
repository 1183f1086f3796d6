use super::handler::{FilterHandler, ProcessorHandler, record_failure};
use super::logger::{Lifecycle, LoggerSet, RequestPhase};
use super::{
    Action, ApplicationError, ApplicationResult, Filter, Logger, Processor, Request, SharedRequest,
};
use crate::matcher::Callback;
use crate::router::{Router, RouterOptions};
use crate::types::{Variables, merge_variables};
use std::sync::Arc;

/// Request dispatcher running matched filters ahead of every processor.
#[derive(Debug)]
pub struct Application {
    filters: Router<SharedRequest>,
    processors: Router<SharedRequest>,
    loggers: LoggerSet,
    started: bool,
}

impl Application {
    pub fn new(options: Option<RouterOptions>) -> ApplicationResult<Self> {
        let options = options.unwrap_or_default();
        Ok(Self {
            filters: Router::new(Some(options.clone()))?,
            processors: Router::new(Some(options))?,
            loggers: LoggerSet::default(),
            started: false,
        })
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Registers a filter; routes are partial unless the action says otherwise.
    pub fn add_filter(
        &mut self,
        action: Action,
        filter: Arc<dyn Filter>,
    ) -> ApplicationResult<&mut Self> {
        self.ensure_stopped("filters")?;
        let callback = Callback::handler(FilterHandler { filter });
        self.filters.add_route(action.into_route(false, callback))?;
        Ok(self)
    }

    /// Registers a processor; routes are exact unless the action says otherwise.
    pub fn add_processor(
        &mut self,
        action: Action,
        processor: Arc<dyn Processor>,
    ) -> ApplicationResult<&mut Self> {
        self.ensure_stopped("processors")?;
        let callback = Callback::handler(ProcessorHandler { processor });
        self.processors.add_route(action.into_route(true, callback))?;
        Ok(self)
    }

    pub fn add_logger(&mut self, logger: Arc<dyn Logger>) -> ApplicationResult<&mut Self> {
        self.ensure_stopped("loggers")?;
        self.loggers.push(logger);
        Ok(self)
    }

    pub fn start(&mut self) -> ApplicationResult<&mut Self> {
        if self.started {
            return Err(ApplicationError::AlreadyStarted);
        }
        self.loggers.notify_lifecycle(Lifecycle::Start);
        self.started = true;
        Ok(self)
    }

    pub fn stop(&mut self) -> ApplicationResult<&mut Self> {
        if !self.started {
            return Err(ApplicationError::NotStarted);
        }
        self.started = false;
        self.loggers.notify_lifecycle(Lifecycle::Stop);
        Ok(self)
    }

    /// Dispatches `request` through its processors, each gated by the filters
    /// matching the request path, and returns the request once done.
    ///
    /// `environment.local` holds the merged variables of the running callback
    /// and is restored after each one. A failing callback never aborts the
    /// dispatch: its error lands on `Request::error` and the loggers, and a
    /// failing filter denies the request.
    pub async fn receive(&self, request: Request) -> ApplicationResult<Request> {
        if !self.started {
            return Err(ApplicationError::NotStarted);
        }
        self.loggers.notify_request(RequestPhase::Receive, &request);

        let path = request.path.clone();
        let local = request.environment.local.clone();
        let shared = request.into_shared();
        let mut processors = self.processors.match_path(&path, Arc::clone(&shared));

        while !processors.is_empty()
            && self
                .perform_filters(&shared, &path, &processors.variables())
                .await
        {
            shared.lock().environment.local = merge_variables([&processors.variables(), &local]);
            let outcome = processors.next().await.map(|_| ());
            shared.lock().environment.local = local.clone();
            if let Err(err) = outcome {
                record_failure(&shared, err, &self.loggers);
            }
        }
        drop(processors);

        let request = match Arc::try_unwrap(shared) {
            Ok(mutex) => mutex.into_inner(),
            Err(shared) => shared.lock().clone(),
        };
        self.loggers.notify_request(RequestPhase::Process, &request);
        Ok(request)
    }

    pub fn send(&self, request: &Request) {
        self.loggers.notify_request(RequestPhase::Send, request);
    }

    pub fn fail(&self, request: &Request) {
        self.loggers.notify_request(RequestPhase::Error, request);
    }

    async fn perform_filters(
        &self,
        shared: &SharedRequest,
        path: &str,
        variables: &Variables,
    ) -> bool {
        let local = shared.lock().environment.local.clone();
        let mut filters = self.filters.match_path(path, Arc::clone(shared));

        while is_granted(shared) && !filters.is_empty() {
            shared.lock().environment.local =
                merge_variables([variables, &filters.variables(), &local]);
            let outcome = filters.next().await.map(|_| ());
            shared.lock().environment.local = local.clone();
            if let Err(err) = outcome {
                record_failure(shared, err, &self.loggers);
                shared.lock().granted = false;
            }
        }
        is_granted(shared)
    }

    fn ensure_stopped(&self, what: &'static str) -> ApplicationResult<()> {
        if self.started {
            return Err(ApplicationError::ModifyWhileStarted { what });
        }
        Ok(())
    }
}

fn is_granted(request: &SharedRequest) -> bool {
    request.lock().granted
}
