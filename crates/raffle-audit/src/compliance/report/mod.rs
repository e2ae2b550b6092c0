mod builder;
pub mod views;

pub use builder::{ComplianceReport, ReportInputs, REPORT_TYPE};
