use serde_json::{Map, Value};

/// Drops every null from a JSON tree, then any object the removal left empty.
///
/// Works at every depth, including objects nested in arrays. Returns `None`
/// when the whole value prunes away. Applying it twice gives the same result
/// as applying it once.
pub fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => {
            let pruned: Map<String, Value> = map
                .into_iter()
                .filter_map(|(key, value)| prune(value).map(|value| (key, value)))
                .collect();

            if pruned.is_empty() {
                None
            } else {
                Some(Value::Object(pruned))
            }
        }
        Value::Array(items) => Some(Value::Array(items.into_iter().filter_map(prune).collect())),
        scalar => Some(scalar),
    }
}

/// Depth-first check for a null anywhere in the tree.
pub fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.values().any(contains_null),
        Value::Array(items) => items.iter().any(contains_null),
        _ => false,
    }
}
