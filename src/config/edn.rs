//! EDN documents, read into `serde_json` values
//!
//! Keyword and symbol keys drop their leading colon, so `:remote-dir`
//! becomes `"remote-dir"`. Namespaced keywords keep the `ns/name` form.

use edn_format::Value as Edn;
use serde_json::{Map, Number, Value};

/// Parse one EDN form. A blank or comment-only document reads as `nil`.
pub fn parse_edn(content: &str) -> Result<Value, String> {
    if is_blank(content) {
        return Ok(Value::Null);
    }
    edn_format::parse_str(content)
        .map(|value| to_json(&value))
        .map_err(|e| format!("{e:?}"))
}

fn is_blank(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with(';')
    })
}

fn to_json(value: &Edn) -> Value {
    match value {
        Edn::Nil => Value::Null,
        Edn::Boolean(b) => Value::Bool(*b),
        Edn::String(s) => Value::String(s.clone()),
        Edn::Character(c) => Value::String(c.to_string()),
        Edn::Keyword(_) | Edn::Symbol(_) => Value::String(symbolic(value)),
        Edn::Integer(n) => Value::from(*n),
        Edn::Float(f) => Number::from_f64(f.into_inner())
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Edn::List(items) | Edn::Vector(items) => Value::Array(items.iter().map(to_json).collect()),
        Edn::Set(items) => Value::Array(items.iter().map(to_json).collect()),
        Edn::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(k, v)| (key_of(k), to_json(v)))
                .collect::<Map<String, Value>>(),
        ),
        Edn::TaggedElement(_, inner) => to_json(inner),
        other => Value::String(edn_format::emit_str(other)),
    }
}

fn key_of(key: &Edn) -> String {
    match key {
        Edn::String(s) => s.clone(),
        Edn::Keyword(_) | Edn::Symbol(_) => symbolic(key),
        other => edn_format::emit_str(other),
    }
}

fn symbolic(value: &Edn) -> String {
    let text = edn_format::emit_str(value);
    match text.strip_prefix(':') {
        Some(name) => name.to_string(),
        None => text,
    }
}
