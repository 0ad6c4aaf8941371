//! Report generation: a registry of named generators dispatched over the
//! normalized record set.

pub mod average_rate;
pub mod payout;

use tracing::info;

use crate::domain::Employee;
use crate::error::{PayrollError, Result};

pub use average_rate::AverageHourlyRateReport;
pub use payout::PayoutReport;

/// Width of the rule framing each department block.
pub(crate) const SECTION_RULE_WIDTH: usize = 150;
/// Width of the rule separating the column header from the data rows.
pub(crate) const HEADER_RULE_WIDTH: usize = 105;

/// A named report rendered over the full record set.
pub trait ReportGenerator {
    /// The name the report is requested by on the command line.
    fn name(&self) -> &'static str;

    /// Render the report as text. The caller decides where the text goes.
    fn generate(&self, records: &[Employee]) -> Result<String>;
}

/// Registry of report generators, dispatched by requested name.
pub struct ReportRunner {
    reports: Vec<Box<dyn ReportGenerator>>,
}

impl ReportRunner {
    /// Create a runner with the built-in reports registered.
    pub fn new() -> Self {
        let mut runner = Self {
            reports: Vec::new(),
        };
        runner.register(Box::new(PayoutReport));
        runner.register(Box::new(AverageHourlyRateReport));
        runner
    }

    /// Register a report generator. Adding a report is one implementation of
    /// [`ReportGenerator`] plus one call here.
    pub fn register(&mut self, report: Box<dyn ReportGenerator>) {
        self.reports.push(report);
    }

    /// Registered report names, in registration order.
    pub fn available_reports(&self) -> Vec<&'static str> {
        self.reports.iter().map(|report| report.name()).collect()
    }

    /// Render the named report over the records. Unknown names fail with an
    /// error carrying the list of valid names.
    pub fn run(&self, name: &str, records: &[Employee]) -> Result<String> {
        let Some(report) = self.reports.iter().find(|report| report.name() == name) else {
            return Err(PayrollError::UnknownReport {
                requested: name.to_string(),
                available: self
                    .available_reports()
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
            });
        };

        info!(report = name, records = records.len(), "generating report");
        report.generate(records)
    }
}
