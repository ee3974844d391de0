//! Complaint lifecycle statuses inferred from document text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of the complaint registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Accepted,
    Rejected,
    /// The document never mentions a complaint.
    NotFilled,
    Pending,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Accepted => "ACCEPTED",
            ComplaintStatus::Rejected => "REJECTED",
            ComplaintStatus::NotFilled => "NOT FILLED",
            ComplaintStatus::Pending => "PENDING",
        }
    }
}

/// Whether a First Information Report was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FirStatus {
    Filed,
    NotFilled,
}

impl FirStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FirStatus::Filed => "FILED",
            FirStatus::NotFilled => "NOT FILLED",
        }
    }
}

/// Progress of the police investigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestigationStatus {
    Closed,
    Ongoing,
    NotStarted,
}

impl InvestigationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestigationStatus::Closed => "CLOSED",
            InvestigationStatus::Ongoing => "ONGOING",
            InvestigationStatus::NotStarted => "NOT STARTED",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FirStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InvestigationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
