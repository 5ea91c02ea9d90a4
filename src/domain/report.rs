// Report request parameters

pub const DEFAULT_PERIOD_SECS: i64 = 1_800;
pub const DEFAULT_REPORT_NAME: &str = "Summary-PDF";

/// Parameters of one summary-report invocation. The period is always
/// positive; missing or non-positive values fall back to the half-hour
/// default.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub period_secs: i64,
    pub major_ticks_ms: Option<i64>,
    pub minor_ticks_ms: Option<i64>,
    pub end_secs: Option<i64>,
    pub report_name: String,
}

impl ReportRequest {
    pub fn new(
        period_secs: Option<i64>,
        major_ticks_ms: Option<i64>,
        minor_ticks_ms: Option<i64>,
        end_secs: Option<i64>,
        report_name: Option<String>,
    ) -> Self {
        Self {
            period_secs: period_secs.filter(|p| *p > 0).unwrap_or(DEFAULT_PERIOD_SECS),
            major_ticks_ms,
            minor_ticks_ms,
            end_secs,
            report_name: report_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_REPORT_NAME.to_string()),
        }
    }
}
