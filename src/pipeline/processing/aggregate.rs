use tracing::debug;

use crate::domain::{CanonicalField, Employee};
use crate::error::{PayrollError, Result};

/// Parse a record field as an integer, naming the field and the offending
/// value on failure. Surrounding whitespace is ignored; the error carries
/// the raw untrimmed text.
fn parse_numeric(employee: &Employee, field: CanonicalField) -> Result<i64> {
    let value = employee.field(field);
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| PayrollError::NumericParse {
            field: field.as_str(),
            value: value.to_string(),
        })
}

/// Stable sort ascending by numeric id.
///
/// The first record whose id does not parse as an integer aborts the run;
/// ids are never defaulted.
pub fn sort_by_id(records: Vec<Employee>) -> Result<Vec<Employee>> {
    let mut keyed: Vec<(i64, Employee)> = records
        .into_iter()
        .map(|employee| parse_numeric(&employee, CanonicalField::Id).map(|id| (id, employee)))
        .collect::<Result<_>>()?;
    keyed.sort_by_key(|(id, _)| *id);
    Ok(keyed.into_iter().map(|(_, employee)| employee).collect())
}

/// Group records by a field value.
///
/// Groups appear in first-seen order of the distinct values; records keep
/// their relative input order within each group.
pub fn group_by(records: &[Employee], field: CanonicalField) -> Vec<(String, Vec<Employee>)> {
    let mut groups: Vec<(String, Vec<Employee>)> = Vec::new();
    for employee in records {
        let value = employee.field(field);
        match groups
            .iter_mut()
            .find(|(existing, _)| existing.as_str() == value)
        {
            Some((_, members)) => members.push(employee.clone()),
            None => groups.push((value.to_string(), vec![employee.clone()])),
        }
    }
    groups
}

/// Salary for one employee: hours worked times hourly rate, both required to
/// parse as integers. No defaulting; payout must never silently under-report.
/// The product is range-checked, so overflow is an error rather than a
/// wrapped value.
pub fn compute_salary(employee: &Employee) -> Result<i64> {
    let hours = parse_numeric(employee, CanonicalField::HoursWorked)?;
    let rate = parse_numeric(employee, CanonicalField::HourlyRate)?;
    hours
        .checked_mul(rate)
        .ok_or(PayrollError::SalaryOverflow { hours, rate })
}

/// Mean of the parseable hourly rates, or `None` when no rate parses.
///
/// Unlike [`compute_salary`] this tolerates bad values: the average is a
/// best-effort statistic over noisy data, so unparseable rates are skipped.
pub fn compute_average_rate(records: &[Employee]) -> Option<f64> {
    let rates: Vec<f64> = records
        .iter()
        .filter_map(|employee| match employee.hourly_rate.trim().parse::<f64>() {
            Ok(rate) => Some(rate),
            Err(_) => {
                debug!(value = %employee.hourly_rate, "skipping unparseable hourly rate");
                None
            }
        })
        .collect();

    if rates.is_empty() {
        None
    } else {
        Some(rates.iter().sum::<f64>() / rates.len() as f64)
    }
}
