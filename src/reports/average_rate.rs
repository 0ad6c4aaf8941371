use crate::domain::{CanonicalField, Employee};
use crate::error::Result;
use crate::pipeline::processing::aggregate;
use crate::reports::{ReportGenerator, SECTION_RULE_WIDTH};

/// Per-department mean of the parseable hourly rates.
///
/// A department where no rate parses renders a no-data line instead of a
/// number; the report itself never fails on bad values.
pub struct AverageHourlyRateReport;

impl ReportGenerator for AverageHourlyRateReport {
    fn name(&self) -> &'static str {
        "average_hourly_rate"
    }

    fn generate(&self, records: &[Employee]) -> Result<String> {
        let mut out = String::new();
        for (department, members) in aggregate::group_by(records, CanonicalField::Department) {
            out.push_str(&format!("Department: {department}\n"));
            out.push_str(&format!("{}\n", "-".repeat(SECTION_RULE_WIDTH)));
            match aggregate::compute_average_rate(&members) {
                Some(average) => {
                    out.push_str(&format!("Average Hourly Rate: {average:.2}\n"));
                }
                None => out.push_str("No data available for average hourly rate.\n"),
            }
            out.push_str(&format!("{}\n\n", "-".repeat(SECTION_RULE_WIDTH)));
        }
        Ok(out)
    }
}
