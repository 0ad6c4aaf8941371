use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::domain::{CanonicalField, Employee};
use crate::error::{PayrollError, Result};
use crate::pipeline::ingestion::headers;

/// Read a JSON file into canonical employee records.
///
/// The document root must be an array. The header set is taken from the
/// first element's keys in document order; every element is then read
/// through that one resolution, so keys appearing only in later elements
/// never supply a field.
pub fn read_json(path: &Path) -> Result<Vec<Employee>> {
    let contents = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&contents)?;

    let Value::Array(elements) = document else {
        return Err(PayrollError::InvalidJsonRoot(path.display().to_string()));
    };

    let Some(first) = elements.first() else {
        debug!(path = %path.display(), "empty json array; no records");
        return Ok(Vec::new());
    };

    let raw_headers: Vec<&str> = match first.as_object() {
        Some(object) => object.keys().map(|key| key.as_str()).collect(),
        None => Vec::new(),
    };
    let resolution = headers::standardize(&raw_headers);

    let mut records = Vec::with_capacity(elements.len());
    for element in &elements {
        let mut employee = Employee::default();
        if let Some(object) = element.as_object() {
            for field in CanonicalField::ALL {
                if let Some(chosen) = resolution.header_for(field) {
                    let value = object.get(chosen).map(coerce_value).unwrap_or_default();
                    employee.set_field(field, value);
                }
            }
        }
        records.push(employee);
    }

    debug!(
        path = %path.display(),
        records = records.len(),
        resolved_fields = resolution.len(),
        "read json file"
    );
    Ok(records)
}

/// Coerce a JSON value to the textual form shared with the CSV path.
fn coerce_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
