use super::{Entries, Entry, EntryKey};
use crate::types::Variables;
use serde_json::Value;
use smallvec::SmallVec;

/// Entries of one table matching a single directory.
#[derive(Debug)]
pub struct Search<'t, D> {
    pub entries: SmallVec<[&'t Entry<D>; 4]>,
    pub variables: Variables,
}

/// Outcome of walking the trie along a split path.
#[derive(Debug)]
pub struct Selection<'t, D> {
    /// Number of leading directories consumed by the walk.
    pub consumed: usize,
    /// Entries with callbacks at the deepest depth that produced any.
    pub entries: Vec<&'t Entry<D>>,
    /// Variables captured up to that depth.
    pub variables: Variables,
}

/// Selects the children of `entries` matching `directory`, in insertion order.
///
/// Pattern entries match through their constraint and capture the directory
/// under their variable name; literal entries match by equality.
#[tracing::instrument(level = "trace", skip(entries), fields(children = entries.len() as u64))]
pub fn search_entries<'t, D>(directory: &str, entries: &'t Entries<D>) -> Search<'t, D> {
    let mut search = Search {
        entries: SmallVec::new(),
        variables: Variables::new(),
    };

    for entry in entries {
        match (entry.key(), entry.binding()) {
            (EntryKey::Pattern(_), Some(binding)) => {
                if binding.pattern.is_match(directory) {
                    search.variables.insert(
                        binding.variable.clone(),
                        Value::String(directory.to_string()),
                    );
                    search.entries.push(entry);
                }
            }
            (key, _) => {
                if key.as_str() == directory {
                    search.entries.push(entry);
                }
            }
        }
    }
    search
}

/// Walks the trie breadth-first along `directories`.
///
/// Every depth that yields entries with callbacks replaces the candidate set
/// and snapshots the variables captured so far; shallower candidates are
/// dropped. Variables accumulate across depths with earlier captures kept on
/// collision. A directory counts as consumed whenever any child matched it.
pub fn collect_entries<'t, D>(root: &'t Entries<D>, directories: &[&str]) -> Selection<'t, D> {
    let mut selection = Selection {
        consumed: 0,
        entries: Vec::new(),
        variables: Variables::new(),
    };
    let mut targets: SmallVec<[&'t Entries<D>; 8]> = SmallVec::new();
    targets.push(root);
    let mut variables = Variables::new();

    while selection.consumed < directories.len() && !targets.is_empty() {
        let directory = directories[selection.consumed];
        let mut next_targets: SmallVec<[&'t Entries<D>; 8]> = SmallVec::new();
        let mut candidates: Vec<&'t Entry<D>> = Vec::new();

        for &entries in targets.iter() {
            let search = search_entries(directory, entries);
            for (name, value) in search.variables {
                variables.entry(name).or_insert(value);
            }
            for entry in search.entries {
                if entry.has_events() {
                    candidates.push(entry);
                }
                next_targets.push(entry.entries());
            }
        }

        targets = next_targets;
        if !targets.is_empty() {
            selection.consumed += 1;
        }
        if !candidates.is_empty() {
            selection.entries = candidates;
            selection.variables = variables.clone();
        }
    }

    tracing::event!(
        tracing::Level::TRACE,
        operation = "collect_entries",
        consumed = selection.consumed as u64,
        candidates = selection.entries.len() as u64
    );
    selection
}
