//! Layered merging of YAML config documents.
//!
//! - Mappings merge key by key, recursively
//! - Sequences and scalars from the overlay replace the base
//! - A `null` in the overlay removes the key

use serde_yaml::{Mapping, Value};

/// Merge `overlay` into `base` in place.
pub fn merge_into(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                if value.is_null() {
                    base_map.remove(&key);
                } else if let Some(existing) = base_map.get_mut(&key) {
                    merge_into(existing, value);
                } else {
                    base_map.insert(key, value);
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Merge two documents, returning a new one.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let mut merged = base.clone();
    merge_into(&mut merged, overlay.clone());
    merged
}

/// Merge layers in priority order, lowest first.
pub fn merge_layers<I>(layers: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let mut merged = Value::Mapping(Mapping::new());
    for layer in layers {
        // An empty file parses as null; treat it as an empty layer.
        if !layer.is_null() {
            merge_into(&mut merged, layer);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn nested_mappings_merge() {
        let merged = deep_merge(
            &yaml("settings:\n  cache_ttl_seconds: 60\n  output_format: human\n"),
            &yaml("settings:\n  output_format: json\n"),
        );
        assert_eq!(
            merged,
            yaml("settings:\n  cache_ttl_seconds: 60\n  output_format: json\n")
        );
    }

    #[test]
    fn sequences_are_replaced() {
        let merged = deep_merge(
            &yaml("content: [a.json, b.json]"),
            &yaml("content: [c.yml]"),
        );
        assert_eq!(merged, yaml("content: [c.yml]"));
    }

    #[test]
    fn null_removes_key() {
        let merged = deep_merge(&yaml("facts: facts.yml\ncontent: [a]"), &yaml("facts: ~"));
        assert_eq!(merged, yaml("content: [a]"));
    }

    #[test]
    fn layers_apply_in_order() {
        let merged = merge_layers(vec![
            yaml("settings:\n  cache_ttl_seconds: 10"),
            Value::Null,
            yaml("settings:\n  cache_ttl_seconds: 20"),
            yaml("facts: local.yml"),
        ]);
        assert_eq!(
            merged,
            yaml("settings:\n  cache_ttl_seconds: 20\nfacts: local.yml")
        );
    }

    #[test]
    fn no_layers_is_empty_mapping() {
        assert_eq!(merge_layers(Vec::new()), Value::Mapping(Mapping::new()));
    }
}
