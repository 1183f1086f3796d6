mod entry;
mod insert;
mod search;
mod split;

pub use entry::{Binding, Entries, Entry, EntryKey, Event};
pub use insert::{Directory, insert_entries, resolve_directories};
pub use search::{Search, Selection, collect_entries, search_entries};
pub use split::{Directories, split_path};
