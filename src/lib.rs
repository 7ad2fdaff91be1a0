//! Payslip rendering for a single employee and pay period.
//!
//! Money is carried as integer cents throughout [`model`]; [`format`] holds the
//! currency and number-to-words helpers used when the slip is displayed.

pub mod dto;
pub mod format;
pub mod model;
pub mod report;
