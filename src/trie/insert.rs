use super::{Binding, Entry, EntryKey};
use crate::router::{RouterError, RouterResult};
use regex::Regex;
use std::collections::HashMap;

/// A directory token ready for insertion: either matched literally or bound
/// to a compiled constraint.
#[derive(Debug, Clone)]
pub enum Directory {
    Literal(String),
    Variable(Binding),
}

impl Directory {
    fn key(&self) -> EntryKey {
        match self {
            Directory::Literal(s) => EntryKey::Literal(s.as_str().into()),
            Directory::Variable(binding) => EntryKey::Pattern(binding.pattern.as_str().into()),
        }
    }
}

/// Resolves every variable directory against `constraint`, compiling its
/// pattern. Nothing touches the trie here, so a failure leaves it unchanged.
pub fn resolve_directories<'a, I>(
    directories: I,
    constraint: &HashMap<String, String>,
    recognizer: &Regex,
    path: &str,
) -> RouterResult<Vec<Directory>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    for directory in directories {
        let Some(name) = recognizer
            .captures(directory)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            out.push(Directory::Literal(directory.to_string()));
            continue;
        };

        let raw = constraint
            .get(name)
            .ok_or_else(|| RouterError::MissingConstraint {
                variable: name.to_string(),
                path: path.to_string(),
            })?;
        let pattern = Regex::new(raw).map_err(|err| RouterError::InvalidConstraint {
            variable: name.to_string(),
            path: path.to_string(),
            pattern: raw.clone(),
            reason: err.to_string(),
        })?;

        out.push(Directory::Variable(Binding {
            pattern,
            variable: name.to_string(),
        }));
    }
    Ok(out)
}

/// Walks the trie from `root` along `directories`, creating missing entries.
///
/// Returns the entry for the last directory and how many nodes were created.
/// A variable directory reuses an existing entry with the same constraint
/// pattern, keeping that entry's original variable name.
pub fn insert_entries<D>(
    root: &mut Entry<D>,
    directories: Vec<Directory>,
) -> (&mut Entry<D>, usize) {
    let mut created = 0usize;
    let mut entry = root;

    for directory in directories {
        let key = directory.key();
        let (child, is_new) = entry
            .entries_mut()
            .get_or_insert_with(key, |key| match directory {
                Directory::Literal(_) => Entry::new(key, None),
                Directory::Variable(binding) => Entry::new(key, Some(binding)),
            });
        if is_new {
            created += 1;
        }
        entry = child;
    }

    (entry, created)
}
