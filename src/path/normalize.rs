pub const SEPARATOR: char = '/';

/// Normalizes `path`, resolving `.` and `..` pieces and collapsing repeated
/// separators. A trailing separator survives; `..` never climbs above the
/// root of an absolute path. The empty path normalizes to `.`.
#[inline]
#[tracing::instrument(level = "trace", fields(path_len = path.len() as u64))]
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let pieces: Vec<&str> = path.split(SEPARATOR).collect();
    let length = pieces.len();
    let mut newer: Vec<&str> = Vec::with_capacity(length);
    let mut last: Option<&str> = None;

    for (offset, &part) in pieces.iter().enumerate() {
        if newer.is_empty() {
            newer.push(part);
            last = Some(part);
        } else if part == "." {
            continue;
        } else if part == ".." && last != Some("..") {
            if last != Some("") {
                newer.pop();
                last = newer.last().copied();
            }
        } else if !part.is_empty() {
            if last == Some(".") {
                if let Some(tail) = newer.last_mut() {
                    *tail = part;
                }
            } else {
                newer.push(part);
            }
            last = Some(part);
        } else if offset + 1 == length {
            newer.push(part);
            last = Some(part);
        }
    }

    newer.join("/")
}

/// Joins the non-empty `paths` and normalizes the result.
pub fn join<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = paths
        .into_iter()
        .filter(|p| !p.as_ref().is_empty())
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("/");
    normalize(&joined)
}

/// Resolves `paths` left to right: an absolute path restarts the result, a
/// relative one is joined onto it.
pub fn resolve<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut resolved = String::new();
    for path in paths {
        let path = path.as_ref();
        resolved = if path.starts_with(SEPARATOR) {
            normalize(path)
        } else {
            join([resolved.as_str(), path])
        };
    }
    resolved
}

/// Directory part of the normalized path; empty when it has no separator.
pub fn dirname(path: &str) -> String {
    let normalized = normalize(path);
    match normalized.rfind(SEPARATOR) {
        Some(pos) => normalized[..pos].to_string(),
        None => String::new(),
    }
}

pub fn basename(path: &str) -> String {
    let normalized = normalize(path);
    match normalized.rfind(SEPARATOR) {
        Some(pos) => normalized[pos + 1..].to_string(),
        None => normalized,
    }
}

/// Extension of the base name without its dot.
///
/// A base name without any dot has no extension and yields `""`, where a
/// plain `lastIndexOf`-style slice would return the whole name.
pub fn extname(path: &str) -> String {
    let base = basename(path);
    if base.starts_with('.') {
        return String::new();
    }
    match base.rfind('.') {
        Some(pos) => base[pos + 1..].to_string(),
        None => String::new(),
    }
}
