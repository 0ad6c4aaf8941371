use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::Employee;
use crate::error::Result;
use crate::pipeline::ingestion::headers;

/// Read a CSV file into canonical employee records.
///
/// Parsing is deliberately minimal: lines are terminated by `\n` or `\r\n`
/// and values are split on commas positionally. Quoting and escaping are not
/// supported, so a literal comma inside a value is not representable. Only
/// the line terminator is stripped; any other whitespace is data.
pub fn read_csv(path: &Path) -> Result<Vec<Employee>> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();

    let Some(header_line) = lines.next() else {
        debug!(path = %path.display(), "empty csv file; no records");
        return Ok(Vec::new());
    };

    let raw_headers: Vec<&str> = header_line.split(',').collect();
    let resolution = headers::standardize(&raw_headers);
    let lowered_headers: Vec<String> = raw_headers
        .iter()
        .map(|header| header.to_lowercase())
        .collect();

    let mut records = Vec::new();
    for line in lines {
        let mut employee = Employee::default();
        // Rows shorter than the header leave trailing fields at their
        // empty-string default; values past the header count are ignored.
        for (header, value) in lowered_headers.iter().zip(line.split(',')) {
            if let Some(field) = resolution.field_for(header) {
                employee.set_field(field, value.to_string());
            }
        }
        records.push(employee);
    }

    debug!(
        path = %path.display(),
        records = records.len(),
        resolved_fields = resolution.len(),
        "read csv file"
    );
    Ok(records)
}
