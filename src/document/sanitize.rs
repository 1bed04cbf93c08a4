use serde_yaml::Value;

/// Tally of removed `format: boolean` declarations.
#[derive(Debug, Default)]
pub struct SanitizeStats {
    pub removed: usize,
    /// JSON pointer of each mapping that lost its `format`, in document order.
    pub locations: Vec<String>,
}

impl SanitizeStats {
    fn record(&mut self, location: String) {
        self.removed += 1;
        self.locations.push(location);
    }
}

/// Remove `format` from every mapping declaring `type: boolean` with a `format`
/// of "boolean" (any case). Everything else is left as is.
pub fn sanitize(value: Value, stats: &mut SanitizeStats) -> Value {
    let mut path = String::new();
    sanitize_at(value, stats, &mut path)
}

fn sanitize_at(value: Value, stats: &mut SanitizeStats, path: &mut String) -> Value {
    match value {
        Value::Mapping(mut map) => {
            if is_boolean_type(&map) && has_boolean_format(&map) {
                map.shift_remove("format");
                stats.record(path.clone());
            }
            for (k, v) in map.iter_mut() {
                let len = path.len();
                push_segment(path, k);
                *v = sanitize_at(std::mem::take(v), stats, path);
                path.truncate(len);
            }
            Value::Mapping(map)
        }
        Value::Sequence(seq) => Value::Sequence(
            seq.into_iter()
                .enumerate()
                .map(|(i, v)| {
                    let len = path.len();
                    path.push('/');
                    path.push_str(&i.to_string());
                    let v = sanitize_at(v, stats, path);
                    path.truncate(len);
                    v
                })
                .collect(),
        ),
        Value::Tagged(mut tagged) => {
            tagged.value = sanitize_at(std::mem::take(&mut tagged.value), stats, path);
            Value::Tagged(tagged)
        }
        scalar => scalar,
    }
}

fn is_boolean_type(map: &serde_yaml::Mapping) -> bool {
    map.get("type").and_then(Value::as_str) == Some("boolean")
}

fn has_boolean_format(map: &serde_yaml::Mapping) -> bool {
    map.get("format")
        .and_then(Value::as_str)
        .is_some_and(|f| f.eq_ignore_ascii_case("boolean"))
}

/// Append a JSON pointer segment, escaping `~` and `/`.
fn push_segment(path: &mut String, key: &Value) {
    path.push('/');
    let key = match key {
        Value::String(s) => s.clone(),
        other => super::normalize::key_text(other),
    };
    path.push_str(&key.replace('~', "~0").replace('/', "~1"));
}
