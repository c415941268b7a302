use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => render_array_table(&items),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render(&headers, &rows))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render(&headers, &rows))
        }
    }
}

fn render_array_table(items: &[Value]) -> anyhow::Result<String> {
    if items.is_empty() {
        return Ok(String::from("(no rows)"));
    }

    let all_objects = items.iter().all(Value::is_object);
    if !all_objects {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return Ok(table::render(&headers, &rows));
    }

    // Column order: first appearance across the rows.
    let mut headers = Vec::<String>::new();
    for item in items {
        if let Some(map) = item.as_object() {
            for key in map.keys() {
                if !headers.contains(key) {
                    headers.push(key.clone());
                }
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    Ok(table::render(&header_refs, &rows))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        count: u32,
    }

    #[test]
    fn json_format_is_pretty() {
        let rendered = render(&Row { name: "a", count: 1 }, OutputFormat::Json).unwrap();
        assert!(rendered.contains('\n'));
        assert!(rendered.contains("\"name\": \"a\""));
    }

    #[test]
    fn raw_format_is_compact() {
        let rendered = render(&Row { name: "a", count: 1 }, OutputFormat::Raw).unwrap();
        assert_eq!(rendered, r#"{"name":"a","count":1}"#);
    }

    #[test]
    fn array_of_objects_renders_with_column_headers() {
        let rows = vec![Row { name: "a", count: 1 }, Row { name: "b", count: 2 }];
        let rendered = render(&rows, OutputFormat::Table).unwrap();
        assert!(rendered.contains("name"));
        assert!(rendered.contains("count"));
        assert!(rendered.contains('a'));
        assert!(rendered.contains('2'));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let rendered = render(&Vec::<Row>::new(), OutputFormat::Table).unwrap();
        assert_eq!(rendered, "(no rows)");
    }
}
