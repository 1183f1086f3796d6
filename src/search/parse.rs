use super::{SearchResult, decode_component};
use hashbrown::HashMap as FastHashMap;

/// One occurrence of a search parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchItem {
    /// Parameter given without a value, as in `?debug` or `?debug=`.
    Present,
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchValue {
    Single(SearchItem),
    /// Every occurrence of a repeated parameter, in order.
    Multiple(Vec<SearchItem>),
}

impl SearchValue {
    fn push(&mut self, item: SearchItem) {
        match self {
            SearchValue::Single(first) => {
                let first = std::mem::replace(first, SearchItem::Present);
                *self = SearchValue::Multiple(vec![first, item]);
            }
            SearchValue::Multiple(items) => items.push(item),
        }
    }

    pub fn first(&self) -> Option<&SearchItem> {
        match self {
            SearchValue::Single(item) => Some(item),
            SearchValue::Multiple(items) => items.first(),
        }
    }
}

pub type SearchMap = FastHashMap<String, SearchValue>;

/// Parses a URL search string (without the leading `?`).
///
/// Pairs are split on `&` and then `=`; anything after a second `=` is
/// ignored. Names and values are trimmed, names left blank are skipped and
/// values are percent-decoded.
pub fn parse_url_search(search: &str) -> SearchResult<SearchMap> {
    let mut map = SearchMap::new();

    for entry in search.split('&') {
        let mut pieces = entry.split('=');
        let name = pieces.next().unwrap_or_default().trim();
        if name.is_empty() {
            continue;
        }

        let raw = pieces.next().unwrap_or_default().trim();
        let decoded = decode_component(raw)?;
        let item = if decoded.is_empty() {
            SearchItem::Present
        } else {
            SearchItem::Text(decoded.into_owned())
        };

        match map.get_mut(name) {
            Some(current) => current.push(item),
            None => {
                map.insert(name.to_string(), SearchValue::Single(item));
            }
        }
    }

    tracing::event!(tracing::Level::TRACE, operation = "parse_url_search", params = map.len() as u64);
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchError;

    fn text(value: &str) -> SearchItem {
        SearchItem::Text(value.to_string())
    }

    #[test]
    fn parses_simple_pairs() {
        let map = parse_url_search("page=2&sort=name").expect("search should parse");
        assert_eq!(map.get("page"), Some(&SearchValue::Single(text("2"))));
        assert_eq!(map.get("sort"), Some(&SearchValue::Single(text("name"))));
    }

    #[test]
    fn repeated_names_collect_in_order() {
        let map = parse_url_search("tag=a&tag=&tag=c").expect("search should parse");
        assert_eq!(
            map.get("tag"),
            Some(&SearchValue::Multiple(vec![
                text("a"),
                SearchItem::Present,
                text("c")
            ]))
        );
    }

    #[test]
    fn flags_without_values_are_present() {
        let map = parse_url_search("debug&verbose=").expect("search should parse");
        assert_eq!(map.get("debug"), Some(&SearchValue::Single(SearchItem::Present)));
        assert_eq!(map.get("verbose"), Some(&SearchValue::Single(SearchItem::Present)));
    }

    #[test]
    fn blank_names_are_skipped_and_values_trimmed() {
        let map = parse_url_search(" =x&&  q = hello%20world ").expect("search should parse");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("q"), Some(&SearchValue::Single(text("hello world"))));
    }

    #[test]
    fn text_after_second_equals_is_ignored() {
        let map = parse_url_search("expr=a=b").expect("search should parse");
        assert_eq!(map.get("expr").and_then(SearchValue::first), Some(&text("a")));
    }

    #[test]
    fn malformed_escape_is_an_error() {
        let err = parse_url_search("q=%E0%A4%A").unwrap_err();
        assert!(matches!(err, SearchError::MalformedEscape { .. }));
    }

    #[test]
    fn empty_search_is_empty_map() {
        assert!(parse_url_search("").expect("search should parse").is_empty());
    }
}
