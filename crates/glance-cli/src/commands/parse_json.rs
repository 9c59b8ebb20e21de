//! `claude-glance parse-json <field>...`
//!
//! Field extractor for the bundled shell scripts: reads a JSON document on
//! stdin and prints one line per dotted field path. Missing fields, nulls and
//! unparseable input print empty lines so the line count always matches.

use std::io::{self, Read, Write};

use anyhow::Result;
use serde_json::Value;

/// Look up a dotted path; numeric segments index into arrays
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| match current {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Shell-friendly text for a value
fn render(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// One output line per field
pub fn extract(input: &str, fields: &[String]) -> Vec<String> {
    let parsed: Option<Value> = serde_json::from_str(input).ok();
    fields
        .iter()
        .map(|field| render(parsed.as_ref().and_then(|v| lookup(v, field))))
        .collect()
}

/// Execute the parse-json command against stdin/stdout
pub fn execute(fields: &[String]) -> Result<()> {
    let mut input = String::new();
    if io::stdin().read_to_string(&mut input).is_err() {
        input.clear();
    }

    let mut out = io::stdout().lock();
    for line in extract(&input, fields) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_nested_fields() {
        let input = r#"{"session_id":"abc","workspace":{"current_dir":"/w"},"cost":{"total":1.5}}"#;
        assert_eq!(
            extract(input, &fields(&["session_id", "workspace.current_dir", "cost.total"])),
            vec!["abc", "/w", "1.5"]
        );
    }

    #[test]
    fn test_missing_and_null_fields_are_empty() {
        let input = r#"{"a":null,"b":{"c":1}}"#;
        assert_eq!(
            extract(input, &fields(&["a", "b.x", "zzz", "b"])),
            vec!["", "", "", "{\"c\":1}"]
        );
    }

    #[test]
    fn test_array_index_and_bool() {
        let input = r#"{"list":["x","y"],"ok":true}"#;
        assert_eq!(extract(input, &fields(&["list.1", "ok"])), vec!["y", "true"]);
    }

    #[test]
    fn test_invalid_input_prints_one_empty_line_per_field() {
        assert_eq!(extract("not json", &fields(&["a", "b"])), vec!["", ""]);
    }
}
