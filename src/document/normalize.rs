use itertools::Itertools;
use serde_yaml::{Mapping, Value};

/// Rewrite every mapping in the tree so that its keys are strings.
///
/// Mappings whose keys are already strings are updated in place. Any other mapping is
/// rebuilt with each key coerced through [`key_text`]. If two keys coerce to the same
/// text, the later one in document order wins.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Mapping(mut map) => {
            if map.keys().all(Value::is_string) {
                for v in map.values_mut() {
                    *v = normalize(std::mem::take(v));
                }
                Value::Mapping(map)
            } else {
                let map = map
                    .into_iter()
                    .map(|(k, v)| (Value::String(key_text(&k)), normalize(v)))
                    .collect::<Mapping>();
                Value::Mapping(map)
            }
        }
        Value::Sequence(seq) => Value::Sequence(seq.into_iter().map(normalize).collect()),
        Value::Tagged(mut tagged) => {
            tagged.value = normalize(std::mem::take(&mut tagged.value));
            Value::Tagged(tagged)
        }
        scalar => scalar,
    }
}

/// Textual rendering of a mapping key.
/// e.g. `1` -> "1", `true` -> "true", `~` -> "null", `[1, a]` -> "[1, a]"
pub fn key_text(key: &Value) -> String {
    match key {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(seq) => format!("[{}]", seq.iter().map(key_text).join(", ")),
        Value::Mapping(map) => format!(
            "{{{}}}",
            map.iter()
                .map(|(k, v)| format!("{}: {}", key_text(k), key_text(v)))
                .join(", ")
        ),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, key_text(&tagged.value)),
    }
}
