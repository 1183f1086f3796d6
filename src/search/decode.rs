use super::{SearchError, SearchResult};
use memchr::memchr;
use std::borrow::Cow;

/// Percent-decodes one URI component. `+` stays literal.
pub fn decode_component(input: &str) -> SearchResult<Cow<'_, str>> {
    let bytes = input.as_bytes();
    let Some(first) = memchr(b'%', bytes) else {
        return Ok(Cow::Borrowed(input));
    };

    let mut output = Vec::with_capacity(bytes.len());
    output.extend_from_slice(&bytes[..first]);

    let mut idx = first;
    while idx < bytes.len() {
        let byte = bytes[idx];
        if byte != b'%' {
            output.push(byte);
            idx += 1;
            continue;
        }
        if idx + 2 >= bytes.len() {
            return Err(SearchError::MalformedEscape {
                input: input.to_string(),
                index: idx,
            });
        }
        let value = decode_hex_pair(bytes[idx + 1], bytes[idx + 2]).ok_or_else(|| {
            SearchError::MalformedEscape {
                input: input.to_string(),
                index: idx,
            }
        })?;
        output.push(value);
        idx += 3;
    }

    String::from_utf8(output)
        .map(Cow::Owned)
        .map_err(|_| SearchError::InvalidUtf8 {
            input: input.to_string(),
        })
}

fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    fn val(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    Some(val(hi)? << 4 | val(lo)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrows_when_nothing_is_escaped() {
        let decoded = decode_component("plain+text").expect("input should decode");
        assert!(matches!(decoded, Cow::Borrowed("plain+text")));
    }

    #[test]
    fn decodes_utf8_sequences() {
        assert_eq!(decode_component("caf%C3%A9").expect("input should decode"), "café");
        assert_eq!(decode_component("a%2Fb%20c").expect("input should decode"), "a/b c");
    }

    #[test]
    fn rejects_truncated_escape() {
        let err = decode_component("abc%2").unwrap_err();
        assert_eq!(
            err,
            SearchError::MalformedEscape {
                input: "abc%2".to_string(),
                index: 3
            }
        );
    }

    #[test]
    fn rejects_non_hex_escape() {
        assert!(matches!(
            decode_component("%zz"),
            Err(SearchError::MalformedEscape { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert!(matches!(
            decode_component("%C3"),
            Err(SearchError::InvalidUtf8 { .. })
        ));
    }
}
