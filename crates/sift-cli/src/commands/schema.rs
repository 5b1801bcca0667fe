use sift_core::entities::{AnalysisResult, HistoryRecord};

use crate::cli::root_commands::{SchemaArgs, SchemaTarget};
use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `sift schema`. Always prints JSON; `--format raw` makes it compact.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for(args.target);
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&schema)?,
    };
    println!("{rendered}");
    Ok(())
}

fn schema_for(target: SchemaTarget) -> schemars::Schema {
    match target {
        SchemaTarget::Record => schemars::schema_for!(HistoryRecord),
        SchemaTarget::Slot => schemars::schema_for!(Vec<HistoryRecord>),
        SchemaTarget::Result => schemars::schema_for!(AnalysisResult),
    }
}

#[cfg(test)]
mod tests {
    use super::schema_for;
    use crate::cli::root_commands::SchemaTarget;

    #[test]
    fn record_schema_uses_camel_case_keys() {
        let schema = serde_json::to_value(schema_for(SchemaTarget::Record)).unwrap();
        let properties = schema["properties"].as_object().expect("object schema");
        assert!(properties.contains_key("createdAt"));
        assert!(properties.contains_key("verdict"));
    }

    #[test]
    fn slot_schema_is_an_array() {
        let schema = serde_json::to_value(schema_for(SchemaTarget::Slot)).unwrap();
        assert_eq!(schema["type"], "array");
    }

    #[test]
    fn result_schema_requires_factors() {
        let schema = serde_json::to_value(schema_for(SchemaTarget::Result)).unwrap();
        let required = schema["required"].as_array().expect("required list");
        assert!(required.iter().any(|field| field == "factors"));
    }
}
