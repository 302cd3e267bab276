//! Query-string assembly for generated links. Merge order: caller overrides,
//! then parameters persisted from the current request (an existing key is
//! overwritten in place, a new key appends), then the `sort`/`direction`
//! pair itself.

use crate::types::Direction;

// Ordered key → values list. Inserting an existing key replaces its values
// without moving it; a new key appends.
#[derive(Debug, Default)]
struct OrderedParams {
    entries: Vec<(String, Vec<String>)>,
}

impl OrderedParams {
    fn insert(&mut self, key: &str, values: Vec<String>) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((key.to_string(), values)),
        }
    }
}

// Group repeated keys so a multi-valued parameter replaces or appends as one
// unit. First-occurrence order is kept.
fn group(pairs: &[(String, String)]) -> Vec<(String, Vec<String>)> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for (key, value) in pairs {
        match grouped.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value.clone()),
            None => grouped.push((key.clone(), vec![value.clone()])),
        }
    }
    grouped
}

/// Build the full query string for a link that sorts by `sort_param` in
/// `direction`.
pub fn build(
    overrides: &[(String, String)],
    persisted: &[(String, String)],
    sort_param: &str,
    direction: Direction,
) -> String {
    let mut params = OrderedParams::default();
    for (key, values) in group(overrides) {
        params.insert(&key, values);
    }
    for (key, values) in group(persisted) {
        params.insert(&key, values);
    }
    params.insert("sort", vec![sort_param.to_string()]);
    params.insert("direction", vec![direction.as_str().to_string()]);

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, values) in &params.entries {
        for value in values {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
