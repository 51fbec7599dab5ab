use crate::models::StationRecord;
use tracing::warn;
use validator::Validate;

/// Stations whose fields fall outside their documented ranges. Such stations
/// are still converted; the report exists so they can be inspected.
#[derive(Debug, Clone, Default)]
pub struct RangeReport {
    pub total_records: usize,
    pub violations: Vec<RangeViolation>,
}

#[derive(Debug, Clone)]
pub struct RangeViolation {
    pub station_id: String,
    pub details: String,
}

impl RangeReport {
    pub fn valid_records(&self) -> usize {
        self.total_records - self.violations.len()
    }
}

pub struct RangeChecker;

impl Default for RangeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, stations: &[StationRecord]) -> RangeReport {
        let mut report = RangeReport {
            total_records: stations.len(),
            violations: Vec::new(),
        };

        for station in stations {
            if let Err(errors) = station.validate() {
                let mut fields: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                fields.sort();
                let details = format!("out of range: {}", fields.join(", "));
                warn!(station_id = %station.station_id, %details, "Station outside expected ranges");
                report.violations.push(RangeViolation {
                    station_id: station.station_id.clone(),
                    details,
                });
            }
        }

        report
    }

    pub fn generate_summary(&self, report: &RangeReport) -> String {
        let mut summary = format!(
            "Range check: {} of {} stations within expected ranges",
            report.valid_records(),
            report.total_records
        );

        for violation in report.violations.iter().take(10) {
            summary.push_str(&format!(
                "\n  {}: {}",
                violation.station_id, violation.details
            ));
        }
        if report.violations.len() > 10 {
            summary.push_str(&format!("\n  ... and {} more", report.violations.len() - 10));
        }

        summary
    }
}
