//! Response parsing, one routine per output shape.
//!
//! Values are copied exactly as the site formats them. Only fields declared
//! as integers are converted. A response that lacks any expected marker is
//! rejected as a whole; partial records are never returned.

use crate::error::{GeneratorError, Result};
use crate::operation::{FieldKind, Operation, OutputField, OutputShape};
use crate::record::{FieldValue, Generated, GeneratedRecord};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Prefix of the placeholder entry in option lists.
const PLACEHOLDER_PREFIX: &str = "Selecione";

static TEXT_VALUE_REGEX: OnceLock<Regex> = OnceLock::new();
static OPTION_SELECTOR: OnceLock<Selector> = OnceLock::new();

fn text_value_regex() -> &'static Regex {
    TEXT_VALUE_REGEX.get_or_init(|| {
        Regex::new(r"^[0-9A-Za-z][0-9A-Za-z .\-/]{0,63}$").expect("valid regex")
    })
}

fn option_selector() -> &'static Selector {
    OPTION_SELECTOR.get_or_init(|| Selector::parse("option").expect("valid selector"))
}

/// Parse a raw response for `operation`.
pub fn parse(operation: Operation, raw: &str) -> Result<Generated> {
    if raw.trim().is_empty() {
        return Err(GeneratorError::parse(operation.name(), "empty response", raw));
    }

    let parsed = match operation.spec().output {
        OutputShape::Text { field } => Generated::One(parse_text(operation, field, raw)?),
        OutputShape::Html(fields) => Generated::One(parse_html(operation, fields, raw)?),
        OutputShape::Json(fields) => Generated::Many(parse_json(operation, fields, raw)?),
        OutputShape::Options { field } => Generated::Many(parse_options(operation, field, raw)?),
        OutputShape::Sample { .. } => {
            return Err(GeneratorError::spec(
                operation.name(),
                "local operations have no response to parse",
            ));
        }
    };

    tracing::debug!(
        operation = %operation,
        records = parsed.len(),
        "Parsed response"
    );

    Ok(parsed)
}

fn parse_text(operation: Operation, field: &str, raw: &str) -> Result<GeneratedRecord> {
    let value = raw.trim();

    if value.contains('<') {
        return Err(GeneratorError::parse(
            operation.name(),
            "expected a plain value, got markup",
            raw,
        ));
    }
    if !text_value_regex().is_match(value) {
        return Err(GeneratorError::parse(
            operation.name(),
            "unexpected characters in plain value",
            raw,
        ));
    }

    let mut record = GeneratedRecord::new();
    record.insert(field, FieldValue::Text(value.to_string()));
    Ok(record)
}

fn parse_html(operation: Operation, fields: &[OutputField], raw: &str) -> Result<GeneratedRecord> {
    let fragment = Html::parse_fragment(raw);
    let mut record = GeneratedRecord::new();

    for field in fields {
        let selector = Selector::parse(&format!("#{}", field.source)).map_err(|e| {
            GeneratorError::spec(
                operation.name(),
                format!("invalid selector for '{}': {e}", field.source),
            )
        })?;

        let element = fragment.select(&selector).next().ok_or_else(|| {
            GeneratorError::parse(
                operation.name(),
                format!("missing element '#{}'", field.source),
                raw,
            )
        })?;

        let text = element_value(&element);
        let value = convert(operation, field, text, raw)?;
        record.insert(field.name, value);
    }

    Ok(record)
}

/// Form controls carry their value in the `value` attribute; everything
/// else in its text.
fn element_value(element: &ElementRef) -> String {
    match element.value().attr("value") {
        Some(value) => value.trim().to_string(),
        None => element.text().collect::<String>().trim().to_string(),
    }
}

fn convert(operation: Operation, field: &OutputField, text: String, raw: &str) -> Result<FieldValue> {
    match field.kind {
        FieldKind::Text => Ok(FieldValue::Text(text)),
        FieldKind::Integer => text.parse::<i64>().map(FieldValue::Integer).map_err(|_| {
            GeneratorError::parse(
                operation.name(),
                format!("field '{}' is not an integer: '{text}'", field.name),
                raw,
            )
        }),
    }
}

fn parse_json(
    operation: Operation,
    fields: &[OutputField],
    raw: &str,
) -> Result<Vec<GeneratedRecord>> {
    let value: Value = serde_json::from_str(raw.trim()).map_err(|e| {
        GeneratorError::parse(operation.name(), format!("invalid JSON: {e}"), raw)
    })?;

    let objects = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => {
            return Err(GeneratorError::parse(
                operation.name(),
                "expected a JSON object or array",
                raw,
            ));
        }
    };

    if objects.is_empty() {
        return Err(GeneratorError::parse(
            operation.name(),
            "JSON array is empty",
            raw,
        ));
    }

    objects
        .iter()
        .map(|object| json_record(operation, fields, object, raw))
        .collect()
}

fn json_record(
    operation: Operation,
    fields: &[OutputField],
    object: &Value,
    raw: &str,
) -> Result<GeneratedRecord> {
    let Value::Object(map) = object else {
        return Err(GeneratorError::parse(
            operation.name(),
            "array element is not an object",
            raw,
        ));
    };

    let mut record = GeneratedRecord::new();
    for field in fields {
        let text = match map.get(field.source) {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Null) | None => {
                return Err(GeneratorError::parse(
                    operation.name(),
                    format!("missing key '{}'", field.source),
                    raw,
                ));
            }
            Some(other) => {
                return Err(GeneratorError::parse(
                    operation.name(),
                    format!("key '{}' has unexpected value {other}", field.source),
                    raw,
                ));
            }
        };
        record.insert(field.name, convert(operation, field, text, raw)?);
    }

    Ok(record)
}

fn parse_options(operation: Operation, field: &str, raw: &str) -> Result<Vec<GeneratedRecord>> {
    let fragment = Html::parse_fragment(raw);
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for option in fragment.select(option_selector()) {
        let value = option.value().attr("value").unwrap_or_default().trim();
        if value.is_empty() || value == "0" {
            continue;
        }

        let name = option.text().collect::<String>().trim().to_string();
        if name.is_empty() || name.starts_with(PLACEHOLDER_PREFIX) {
            continue;
        }

        if seen.insert(name.clone()) {
            let mut record = GeneratedRecord::new();
            record.insert(field, FieldValue::Text(name));
            records.push(record);
        }
    }

    if records.is_empty() {
        return Err(GeneratorError::parse(
            operation.name(),
            "no <option> entries found",
            raw,
        ));
    }

    Ok(records)
}
