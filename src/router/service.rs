use crate::matcher::Match;
use crate::pipeline::Subject;
use crate::router::{Route, RouterOptions, RouterResult};
use crate::trie::{
    Directory, Entry, Event, collect_entries, insert_entries, resolve_directories, split_path,
};
use crate::types::{Variables, merge_variables};
use regex::Regex;
use std::collections::VecDeque;

/// Segment-trie router over callbacks receiving a `Match<D>`.
///
/// Mutation takes `&mut self`, so no route can be added while a lookup
/// borrows the trie. A `Match` owns its pipeline and outlives the borrow.
#[derive(Debug)]
pub struct Router<D> {
    options: RouterOptions,
    separator: String,
    recognizer: Regex,
    root: Entry<D>,
    counter: usize,
}

impl<D> Router<D> {
    pub fn new(options: Option<RouterOptions>) -> RouterResult<Self> {
        let options = options.unwrap_or_default();
        let recognizer = options.variable_regex()?;
        Ok(Self {
            separator: options.separator.to_string(),
            recognizer,
            options,
            root: Entry::root(),
            counter: 0,
        })
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Number of trie nodes created since construction or the last `clear`.
    #[inline]
    pub fn len(&self) -> usize {
        self.counter
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counter == 0
    }

    /// Registers every route, or none if any of them is invalid.
    pub fn add<I>(&mut self, routes: I) -> RouterResult<&mut Self>
    where
        I: IntoIterator<Item = Route<D>>,
    {
        let mut prepared: Vec<(Vec<Directory>, Route<D>)> = Vec::new();
        for route in routes {
            let directories = resolve_directories(
                split_path(&route.path, &self.separator),
                &route.constraint,
                &self.recognizer,
                &route.path,
            )?;
            prepared.push((directories, route));
        }

        for (directories, route) in prepared {
            tracing::event!(tracing::Level::TRACE, operation = "add", path = %route.path, exact = route.exact);
            let (entry, created) = insert_entries(&mut self.root, directories);
            entry.push_event(
                Event {
                    environment: route.environment,
                    callback: route.on_match,
                },
                route.exact,
            );
            self.counter += created;
        }
        Ok(self)
    }

    pub fn add_route(&mut self, route: Route<D>) -> RouterResult<&mut Self> {
        self.add(std::iter::once(route))
    }

    /// Builds the callback pipeline for `path`, threading `detail` through it.
    #[tracing::instrument(level = "trace", skip(self, detail))]
    pub fn match_path(&self, path: &str, detail: D) -> Match<D> {
        let directories = split_path(path, &self.separator);
        let selection = collect_entries(self.root.entries(), &directories);
        let collected: String = directories[..selection.consumed].concat();
        let remaining: String = directories[selection.consumed..].concat();

        let mut pipeline = Subject::new();
        let mut variables: VecDeque<Variables> = VecDeque::new();
        for entry in selection.entries.iter() {
            if remaining.is_empty() {
                for event in entry.exact() {
                    pipeline.subscribe(event.callback.clone());
                    variables.push_back(merge_variables([&selection.variables, &event.environment]));
                }
            }
            for event in entry.partial() {
                pipeline.subscribe(event.callback.clone());
                variables.push_back(merge_variables([&selection.variables, &event.environment]));
            }
        }

        tracing::event!(
            tracing::Level::DEBUG,
            operation = "match",
            path = %path,
            collected = %collected,
            remaining = %remaining,
            callbacks = pipeline.len() as u64
        );
        Match::new(collected, remaining, variables, detail, pipeline)
    }

    /// Drops every route and resets the node counter.
    pub fn clear(&mut self) -> &mut Self {
        tracing::event!(tracing::Level::TRACE, operation = "clear", nodes = self.counter as u64);
        self.root = Entry::root();
        self.counter = 0;
        self
    }
}
