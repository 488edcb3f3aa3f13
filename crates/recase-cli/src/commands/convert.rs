use anyhow::Result;
use recase_core::{convert_value, segment, CaseStyle};
use serde_json::{json, Value};
use std::str::FromStr;
use tracing::debug;

pub fn execute(text: String, style: String, json_input: bool, format: String) -> Result<()> {
    let style = CaseStyle::from_str(&style)?;

    let value: Value = if json_input {
        serde_json::from_str(&text)?
    } else {
        Value::String(text.clone())
    };
    debug!("Converting {} as {}", value, style);

    let output = convert_value(Some(&value), style)?;

    match format.as_str() {
        "json" => {
            let words = match &value {
                Value::String(s) => segment(s),
                _ => Vec::new(),
            };
            let report = json!({
                "input": value,
                "style": style,
                "words": words,
                "output": output,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            println!("{}", output);
        }
        other => {
            anyhow::bail!("Unsupported output format: {}", other);
        }
    }

    Ok(())
}
