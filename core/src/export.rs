//! # Report Exporter
//!
//! Writes a [`LookupResult`] as a plain-text report:
//!
//! ```text
//! Active Directory Group Membership for: jdoe
//! Date: 2024-03-01 10:00:00
//! Total Groups: 3
//! --------------------------------------------------
//! Accounting
//! Admins
//! VPN-Users
//! ```

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use adgroups_common::error::ExportError;
use adgroups_common::lookup::LookupResult;
use chrono::NaiveDateTime;
use tracing::debug;

pub const SEPARATOR_WIDTH: usize = 50;
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const FILE_SUFFIX: &str = "_AD_Groups.txt";

pub struct ReportExporter;

impl ReportExporter {
    /// Renders the report in memory.
    pub fn render(result: &LookupResult, now: NaiveDateTime) -> Result<String, ExportError> {
        if result.groups.is_empty() {
            return Err(ExportError::NoData);
        }

        let mut report = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(report, "Active Directory Group Membership for: {}", result.username);
        let _ = writeln!(report, "Date: {}", now.format(DATE_FORMAT));
        let _ = writeln!(report, "Total Groups: {}", result.groups.len());
        let _ = writeln!(report, "{}", "-".repeat(SEPARATOR_WIDTH));
        for group in &result.groups {
            let _ = writeln!(report, "{group}");
        }
        Ok(report)
    }

    /// Writes the report to `destination`, creating or truncating it.
    ///
    /// An empty group list fails with [`ExportError::NoData`] before the file is touched.
    pub fn export(
        result: &LookupResult,
        destination: &Path,
        now: NaiveDateTime,
    ) -> Result<(), ExportError> {
        let report = Self::render(result, now)?;

        let file = File::create(destination).map_err(|e| ExportError::io(destination, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(report.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| ExportError::io(destination, e))?;

        debug!(
            "wrote {} bytes to {}",
            report.len(),
            destination.display()
        );
        Ok(())
    }

    /// `<username>_AD_Groups.txt`
    pub fn suggested_file_name(username: &str) -> String {
        format!("{username}{FILE_SUFFIX}")
    }
}
