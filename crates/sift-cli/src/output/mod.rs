use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod report;
pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table_options()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Like [`output`], but table format uses a purpose-built human report.
pub fn output_report<T: Serialize>(
    value: &T,
    format: OutputFormat,
    report: impl FnOnce(&T, table::TableOptions) -> String,
) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Table => report(value, table_options()),
        OutputFormat::Json | OutputFormat::Raw => render(value, format)?,
    };
    println!("{rendered}");
    Ok(())
}

pub fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    headers.sort();

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

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::table::TableOptions;
    use super::{render, render_array_table, value_to_cell};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Example {
        id: i64,
        verdict: &'static str,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example {
            id: 7,
            verdict: "fake",
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 7);
        assert_eq!(parsed["verdict"], "fake");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example {
            id: 7,
            verdict: "fake",
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["verdict"], "fake");
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = Example {
            id: 7,
            verdict: "fake",
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let first = out.lines().next().unwrap_or_default();
        assert!(first.contains("key"));
        assert!(first.contains("value"));
        assert!(out.contains("verdict"));
    }

    #[test]
    fn array_table_unions_object_keys() {
        let items = vec![json!({"id": 1, "title": "a"}), json!({"id": 2, "source": "b"})];
        let out = render_array_table(&items, PLAIN);
        let header = out.lines().next().unwrap_or_default();
        assert!(header.contains("id"));
        assert!(header.contains("source"));
        assert!(header.contains("title"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn empty_array_table_has_placeholder() {
        assert_eq!(render_array_table(&[], PLAIN), "(no rows)");
    }

    #[test]
    fn nested_values_render_as_json() {
        assert_eq!(value_to_cell(&json!(null)), "-");
        assert_eq!(value_to_cell(&json!([1, 2])), "[1,2]");
        assert_eq!(value_to_cell(&json!("text")), "text");
    }
}
