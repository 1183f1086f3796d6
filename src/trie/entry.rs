use crate::matcher::Callback;
use crate::types::Variables;
use hashbrown::HashMap as FastHashMap;
use regex::Regex;

/// Child key inside an [`Entries`] table.
///
/// Literal directories and variable constraints live in separate key spaces,
/// so a literal directory spelled like a constraint never aliases it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryKey {
    Literal(Box<str>),
    Pattern(Box<str>),
}

impl EntryKey {
    pub fn as_str(&self) -> &str {
        match self {
            EntryKey::Literal(s) | EntryKey::Pattern(s) => s,
        }
    }
}

/// Variable binding of a pattern entry: a directory matching `pattern` is
/// captured under `variable`.
#[derive(Debug, Clone)]
pub struct Binding {
    pub pattern: Regex,
    pub variable: String,
}

#[derive(Debug)]
pub struct Event<D> {
    pub environment: Variables,
    pub callback: Callback<D>,
}

#[derive(Debug)]
pub struct Entry<D> {
    key: EntryKey,
    binding: Option<Binding>,
    entries: Entries<D>,
    partial: Vec<Event<D>>,
    exact: Vec<Event<D>>,
}

impl<D> Entry<D> {
    pub(crate) fn new(key: EntryKey, binding: Option<Binding>) -> Self {
        Self {
            key,
            binding,
            entries: Entries::default(),
            partial: Vec::new(),
            exact: Vec::new(),
        }
    }

    /// Unkeyed node holding the top-level entries of a trie.
    pub(crate) fn root() -> Self {
        Self::new(EntryKey::Literal("".into()), None)
    }

    pub fn key(&self) -> &EntryKey {
        &self.key
    }

    pub fn binding(&self) -> Option<&Binding> {
        self.binding.as_ref()
    }

    pub fn entries(&self) -> &Entries<D> {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Entries<D> {
        &mut self.entries
    }

    /// Callbacks fired when this entry is a prefix of the queried path.
    pub fn partial(&self) -> &[Event<D>] {
        &self.partial
    }

    /// Callbacks fired only when this entry consumes the whole queried path.
    pub fn exact(&self) -> &[Event<D>] {
        &self.exact
    }

    pub fn has_events(&self) -> bool {
        !self.partial.is_empty() || !self.exact.is_empty()
    }

    pub(crate) fn push_event(&mut self, event: Event<D>, exact: bool) {
        if exact {
            self.exact.push(event);
        } else {
            self.partial.push(event);
        }
    }
}

/// Insertion-ordered children of a trie node with keyed lookup.
#[derive(Debug)]
pub struct Entries<D> {
    items: Vec<Entry<D>>,
    index: FastHashMap<EntryKey, usize>,
}

impl<D> Default for Entries<D> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: FastHashMap::new(),
        }
    }
}

impl<D> Entries<D> {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, key: &EntryKey) -> Option<&Entry<D>> {
        self.index.get(key).map(|&pos| &self.items[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<D>> {
        self.items.iter()
    }

    /// Returns the child stored under `key`, creating it with `make` when
    /// absent. The flag reports whether a node was created.
    pub(crate) fn get_or_insert_with<F>(&mut self, key: EntryKey, make: F) -> (&mut Entry<D>, bool)
    where
        F: FnOnce(EntryKey) -> Entry<D>,
    {
        if let Some(&pos) = self.index.get(&key) {
            return (&mut self.items[pos], false);
        }
        let pos = self.items.len();
        self.items.push(make(key.clone()));
        self.index.insert(key, pos);
        (&mut self.items[pos], true)
    }
}

impl<'a, D> IntoIterator for &'a Entries<D> {
    type Item = &'a Entry<D>;
    type IntoIter = std::slice::Iter<'a, Entry<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
