//! Status inference from keywords in the document text.

use crate::models::status::{ComplaintStatus, FirStatus, InvestigationStatus};

/// All statuses inferred for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statuses {
    pub complaint: ComplaintStatus,
    pub fir: FirStatus,
    pub investigation: InvestigationStatus,
}

/// Infer statuses from plain substring checks on the upper-cased text.
pub fn infer_statuses(text: &str) -> Statuses {
    let upper = text.to_uppercase();
    Statuses {
        complaint: complaint_status(&upper),
        fir: fir_status(&upper),
        investigation: investigation_status(&upper),
    }
}

fn complaint_status(upper: &str) -> ComplaintStatus {
    if upper.contains("COMPLAINT ACCEPTED") {
        ComplaintStatus::Accepted
    } else if upper.contains("COMPLAINT REJECTED") {
        ComplaintStatus::Rejected
    } else if !upper.contains("COMPLAINT") {
        ComplaintStatus::NotFilled
    } else {
        ComplaintStatus::Pending
    }
}

// Any "FIR" substring counts, including words such as "CONFIRM".
fn fir_status(upper: &str) -> FirStatus {
    if upper.contains("FIR") {
        FirStatus::Filed
    } else {
        FirStatus::NotFilled
    }
}

fn investigation_status(upper: &str) -> InvestigationStatus {
    if upper.contains("CLOSED") {
        InvestigationStatus::Closed
    } else if upper.contains("UNDER PROCESS") {
        InvestigationStatus::Ongoing
    } else {
        InvestigationStatus::NotStarted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_wins_over_rejected() {
        let statuses = infer_statuses("complaint rejected earlier\ncomplaint accepted later");
        assert_eq!(statuses.complaint, ComplaintStatus::Accepted);
    }

    #[test]
    fn test_complaint_status_branches() {
        assert_eq!(
            infer_statuses("Complaint Rejected").complaint,
            ComplaintStatus::Rejected
        );
        assert_eq!(
            infer_statuses("Complaint registered").complaint,
            ComplaintStatus::Pending
        );
        assert_eq!(
            infer_statuses("Transaction receipt").complaint,
            ComplaintStatus::NotFilled
        );
        assert_eq!(infer_statuses("").complaint, ComplaintStatus::NotFilled);
    }

    #[test]
    fn test_fir_status() {
        assert_eq!(infer_statuses("FIR No. 12/2024").fir, FirStatus::Filed);
        assert_eq!(infer_statuses("please confirm").fir, FirStatus::Filed);
        assert_eq!(infer_statuses("no report").fir, FirStatus::NotFilled);
    }

    #[test]
    fn test_investigation_status() {
        assert_eq!(
            infer_statuses("Status: Closed; was under process").investigation,
            InvestigationStatus::Closed
        );
        assert_eq!(
            infer_statuses("Status: Under Process").investigation,
            InvestigationStatus::Ongoing
        );
        assert_eq!(
            infer_statuses("Status: new").investigation,
            InvestigationStatus::NotStarted
        );
    }
}
