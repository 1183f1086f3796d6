use smallvec::SmallVec;

pub type Directories<'a> = SmallVec<[&'a str; 16]>;

/// Splits `path` into directories, keeping the separator as its own token.
///
/// A separator token always leads, and one follows every non-empty piece
/// except the last, so `/a/b` and `ab` walk different trie paths while empty
/// pieces (repeated separators) disappear.
pub fn split_path<'a>(path: &'a str, separator: &'a str) -> Directories<'a> {
    let mut directories: Directories<'a> = SmallVec::new();
    directories.push(separator);

    let mut pieces = path.split(separator).peekable();
    while let Some(piece) = pieces.next() {
        if piece.is_empty() {
            continue;
        }
        directories.push(piece);
        if pieces.peek().is_some() {
            directories.push(separator);
        }
    }
    directories
}
