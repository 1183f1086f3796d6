use serde_json::{Map, Value};

/// Variables captured by a match, merged with the static environment of the
/// route that produced them.
pub type Variables = Map<String, Value>;

/// Merges `layers` left to right; later layers win on key collision.
pub fn merge_variables<'a, I>(layers: I) -> Variables
where
    I: IntoIterator<Item = &'a Variables>,
{
    let mut out = Variables::new();
    for layer in layers {
        for (key, value) in layer {
            out.insert(key.clone(), value.clone());
        }
    }
    out
}
