use crate::domain::{CanonicalField, Employee};
use crate::error::Result;
use crate::pipeline::processing::aggregate;
use crate::reports::{ReportGenerator, HEADER_RULE_WIDTH, SECTION_RULE_WIDTH};

/// Per-department listing of each employee's computed salary.
///
/// Rows within a department are re-sorted ascending by numeric id, and the
/// salary computation is strict: one bad `hours_worked` or `hourly_rate`
/// aborts the whole report rather than under-reporting a payout.
pub struct PayoutReport;

impl ReportGenerator for PayoutReport {
    fn name(&self) -> &'static str {
        "payout"
    }

    fn generate(&self, records: &[Employee]) -> Result<String> {
        let mut out = String::new();
        for (department, members) in aggregate::group_by(records, CanonicalField::Department) {
            let rows = aggregate::sort_by_id(members)?;

            out.push_str(&format!("Department: {department}\n"));
            out.push_str(&format!("{}\n", "-".repeat(SECTION_RULE_WIDTH)));
            out.push_str(&format!(
                "{:<5} {:<25} {:<25} {:<15} {:<15} {:<10}\n",
                "ID", "Name", "Email", "Hours Worked", "Hourly Rate", "Salary"
            ));
            out.push_str(&format!("{}\n", "-".repeat(HEADER_RULE_WIDTH)));

            for employee in &rows {
                let salary = aggregate::compute_salary(employee)?;
                out.push_str(&format!(
                    "{:<5} {:<25} {:<25} {:<15} {:<15} {:<10}\n",
                    employee.id,
                    employee.name,
                    employee.email,
                    employee.hours_worked,
                    employee.hourly_rate,
                    salary
                ));
            }

            out.push_str(&format!("\n{}\n\n", "-".repeat(SECTION_RULE_WIDTH)));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::PayrollError;

    fn sample(id: &str, name: &str, department: &str, hours: &str, rate: &str) -> Employee {
        Employee {
            id: id.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.to_string(),
            department: department.to_string(),
            hours_worked: hours.to_string(),
            hourly_rate: rate.to_string(),
        }
    }

    #[test]
    fn test_renders_departments_with_computed_salaries() {
        let records = vec![
            sample("3", "Charlie", "Sales", "120", "50"),
            sample("1", "Alice", "Sales", "160", "50"),
            sample("2", "Bob", "Marketing", "170", "60"),
        ];

        let rendered = PayoutReport.generate(&records).expect("render");

        assert!(rendered.contains("Department: Sales"));
        assert!(rendered.contains("Department: Marketing"));
        assert!(rendered.contains("8000"));
        assert!(rendered.contains("6000"));
        assert!(rendered.contains("10200"));
    }

    #[test]
    fn test_departments_appear_in_first_seen_order() {
        let records = vec![
            sample("3", "Charlie", "Sales", "120", "50"),
            sample("2", "Bob", "Marketing", "170", "60"),
        ];

        let rendered = PayoutReport.generate(&records).expect("render");

        let sales = rendered.find("Department: Sales").expect("sales block");
        let marketing = rendered
            .find("Department: Marketing")
            .expect("marketing block");
        assert!(sales < marketing);
    }

    #[test]
    fn test_rows_within_a_department_sort_by_numeric_id() {
        let records = vec![
            sample("10", "Janet", "Sales", "100", "10"),
            sample("2", "Bob", "Sales", "100", "10"),
        ];

        let rendered = PayoutReport.generate(&records).expect("render");

        let bob = rendered.find("Bob").expect("bob row");
        let janet = rendered.find("Janet").expect("janet row");
        assert!(bob < janet);
    }

    #[test]
    fn test_rows_use_fixed_column_widths() {
        let records = vec![sample("1", "Alice", "Sales", "160", "50")];

        let rendered = PayoutReport.generate(&records).expect("render");

        let expected_header = format!(
            "{:<5} {:<25} {:<25} {:<15} {:<15} {:<10}",
            "ID", "Name", "Email", "Hours Worked", "Hourly Rate", "Salary"
        );
        let expected_row = format!(
            "{:<5} {:<25} {:<25} {:<15} {:<15} {:<10}",
            "1", "Alice", "alice@example.com", "160", "50", 8000
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Department: Sales");
        assert_eq!(lines[1], "-".repeat(SECTION_RULE_WIDTH));
        assert_eq!(lines[2], expected_header);
        assert_eq!(lines[3], "-".repeat(HEADER_RULE_WIDTH));
        assert_eq!(lines[4], expected_row);
    }

    #[test]
    fn test_bad_numeric_data_aborts_the_report() {
        let records = vec![sample("1", "Alice", "Sales", "abc", "50")];

        let err = PayoutReport.generate(&records).expect_err("must fail");

        assert!(matches!(err, PayrollError::NumericParse { .. }));
    }

    #[test]
    fn test_no_records_render_nothing() {
        let rendered = PayoutReport.generate(&[]).expect("render");
        assert_eq!(rendered, "");
    }
}
