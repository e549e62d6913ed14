//! Monitoring verdicts.
//!
//! This module provides:
//!
//! - [`Status`] - the four Nagios plugin verdicts and their exit codes
//! - [`Review`] - a worst-of severity accumulator for multi-entity checks
//! - [`Report`] - the final one-line verdict printed to stdout

use std::fmt;
use std::process::ExitCode;

/// Plugin verdict, ordered by severity.
///
/// The numeric values are the process exit codes a monitoring supervisor
/// expects. Escalation is monotone: once a review reaches CRITICAL, a later
/// WARNING finding cannot lower it.
///
/// ```
/// use routewatch::Status;
///
/// assert!(Status::Critical > Status::Warning);
/// assert_eq!(Status::Warning.exit_code(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    /// Everything checked is healthy.
    #[default]
    Ok = 0,
    /// Degraded but functional (e.g. session administratively down).
    Warning = 1,
    /// The checked session or adjacency is down.
    Critical = 2,
    /// The check itself could not complete.
    Unknown = 3,
}

impl Status {
    /// Process exit code for this verdict.
    pub fn exit_code(self) -> u8 {
        self as u8
    }

    /// Nagios-style label, as printed at the start of the verdict line.
    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.exit_code())
    }
}

/// Worst-of severity accumulator.
///
/// A check reviewing several entities (iBGP peers, OSPFv3 neighbours) starts
/// at OK and escalates as problems are found. Escalation uses `max`, so a
/// WARNING finding raises an OK verdict but never demotes a CRITICAL one.
#[derive(Debug, Default)]
pub struct Review {
    status: Status,
    problems: Vec<String>,
}

impl Review {
    /// Start a review with an OK verdict and no findings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current verdict.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether no problems have been recorded.
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Record a problem at the given severity.
    pub fn escalate(&mut self, severity: Status, detail: impl Into<String>) {
        self.status = self.status.max(severity);
        self.problems.push(detail.into());
    }

    /// Close the review: the OK detail if nothing was found, otherwise the
    /// accumulated problems joined into one line.
    pub fn finish(self, ok_detail: impl Into<String>) -> Report {
        if self.is_ok() {
            Report::new(Status::Ok, ok_detail)
        } else {
            Report::new(self.status, self.problems.join(", "))
        }
    }
}

/// Final verdict: one line of the form `<LEVEL>: <detail>` plus an exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    status: Status,
    detail: String,
}

impl Report {
    /// Build a report from a verdict and detail text.
    pub fn new(status: Status, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    /// OK report.
    pub fn ok(detail: impl Into<String>) -> Self {
        Self::new(Status::Ok, detail)
    }

    /// WARNING report.
    pub fn warning(detail: impl Into<String>) -> Self {
        Self::new(Status::Warning, detail)
    }

    /// CRITICAL report.
    pub fn critical(detail: impl Into<String>) -> Self {
        Self::new(Status::Critical, detail)
    }

    /// UNKNOWN report, used for every failure of the check itself.
    pub fn unknown(detail: impl Into<String>) -> Self {
        Self::new(Status::Unknown, detail)
    }

    /// Verdict of this report.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Detail text of this report.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Exit code to return to the supervisor.
    pub fn exit_code(&self) -> ExitCode {
        self.status.into()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_nagios_convention() {
        assert_eq!(Status::Ok.exit_code(), 0);
        assert_eq!(Status::Warning.exit_code(), 1);
        assert_eq!(Status::Critical.exit_code(), 2);
        assert_eq!(Status::Unknown.exit_code(), 3);
    }

    #[test]
    fn severity_ordering() {
        assert!(Status::Ok < Status::Warning);
        assert!(Status::Warning < Status::Critical);
        assert!(Status::Critical < Status::Unknown);
    }

    #[test]
    fn review_starts_ok() {
        let review = Review::new();
        assert!(review.is_ok());
        assert_eq!(review.status(), Status::Ok);
    }

    #[test]
    fn review_escalates_to_worst() {
        let mut review = Review::new();
        review.escalate(Status::Warning, "peer A admin down");
        assert_eq!(review.status(), Status::Warning);
        review.escalate(Status::Critical, "peer B session down");
        assert_eq!(review.status(), Status::Critical);
    }

    #[test]
    fn review_never_demotes() {
        let mut review = Review::new();
        review.escalate(Status::Critical, "peer B session down");
        review.escalate(Status::Warning, "peer A admin down");
        assert_eq!(review.status(), Status::Critical);
    }

    #[test]
    fn review_finish_ok_uses_ok_detail() {
        let report = Review::new().finish("All (3) sessions established");
        assert_eq!(report.status(), Status::Ok);
        assert_eq!(report.to_string(), "OK: All (3) sessions established");
    }

    #[test]
    fn review_finish_joins_problems() {
        let mut review = Review::new();
        review.escalate(Status::Warning, "peer A admin down");
        review.escalate(Status::Critical, "peer B session down");
        let report = review.finish("unused");
        assert_eq!(
            report.to_string(),
            "CRITICAL: peer A admin down, peer B session down"
        );
    }

    #[test]
    fn report_display_format() {
        let report = Report::unknown("SNMP Error: timeout");
        assert_eq!(report.to_string(), "UNKNOWN: SNMP Error: timeout");
    }
}
