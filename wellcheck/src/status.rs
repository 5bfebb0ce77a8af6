//! Verdict shown after the latest submission has been scored.

use chrono::{DateTime, Utc};
use wellcheck_types::{SubmissionRecord, SubmissionResult};

/// What the status screen shows for the latest submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellCheckStatus {
    /// No recent submission: the user should take the survey.
    Missing,

    /// Cleared to go to work.
    Clear { at: DateTime<Utc> },

    /// Must stay home. A pending reset request is shown if present.
    NotClear {
        at: DateTime<Utc>,
        reset_requested_at: Option<DateTime<Utc>>,
    },
}

/// Actions offered from the status screen menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusAction {
    /// Fetch the latest submission again.
    Refresh,

    /// Take a new survey.
    NewWellCheck,

    /// Scan the workplace check-in code.
    CheckIn,

    /// Open the employer's contact page.
    ContactCompany,

    /// Ask the employer to allow a new survey.
    RequestReset,
}

impl WellCheckStatus {
    /// Classify the latest submission.
    pub fn from_latest(record: Option<&SubmissionRecord>) -> Self {
        match record {
            None => Self::Missing,
            Some(record) => match record.result {
                SubmissionResult::Clear => Self::Clear {
                    at: record.created_at,
                },
                SubmissionResult::NotClear => Self::NotClear {
                    at: record.created_at,
                    reset_requested_at: record.latest_reset_request().map(|r| r.created_at),
                },
            },
        }
    }

    /// The big verdict line, if there is one.
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            Self::Missing => None,
            Self::Clear { .. } => Some("GO TO WORK"),
            Self::NotClear { .. } => Some("STAY HOME"),
        }
    }

    /// When the latest submission was made.
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Missing => None,
            Self::Clear { at } | Self::NotClear { at, .. } => Some(*at),
        }
    }

    /// Menu actions available for this verdict, in menu order.
    pub fn actions(&self) -> &'static [StatusAction] {
        match self {
            Self::Missing => &[StatusAction::Refresh],
            Self::Clear { .. } => &[
                StatusAction::Refresh,
                StatusAction::CheckIn,
                StatusAction::NewWellCheck,
            ],
            Self::NotClear { .. } => &[
                StatusAction::Refresh,
                StatusAction::ContactCompany,
                StatusAction::RequestReset,
            ],
        }
    }

    /// Check if the user may go to work.
    pub fn is_clear(&self) -> bool {
        matches!(self, Self::Clear { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wellcheck_types::ResetRequest;

    fn record(result: SubmissionResult, resets: Vec<ResetRequest>) -> SubmissionRecord {
        SubmissionRecord {
            result,
            created_at: Utc.with_ymd_and_hms(2026, 10, 19, 7, 30, 0).unwrap(),
            reset_requests: resets,
        }
    }

    #[test]
    fn missing_submission() {
        let status = WellCheckStatus::from_latest(None);
        assert_eq!(status, WellCheckStatus::Missing);
        assert_eq!(status.headline(), None);
        assert_eq!(status.actions(), &[StatusAction::Refresh]);
        assert!(status.submitted_at().is_none());
    }

    #[test]
    fn clear_submission() {
        let status = WellCheckStatus::from_latest(Some(&record(SubmissionResult::Clear, vec![])));
        assert!(status.is_clear());
        assert_eq!(status.headline(), Some("GO TO WORK"));
        assert!(status.actions().contains(&StatusAction::CheckIn));
        assert!(!status.actions().contains(&StatusAction::RequestReset));
    }

    #[test]
    fn not_clear_with_reset_request() {
        let requested = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
        let status = WellCheckStatus::from_latest(Some(&record(
            SubmissionResult::NotClear,
            vec![ResetRequest {
                created_at: requested,
            }],
        )));

        assert_eq!(status.headline(), Some("STAY HOME"));
        assert!(matches!(
            status,
            WellCheckStatus::NotClear { reset_requested_at: Some(at), .. } if at == requested
        ));
        assert_eq!(
            status.actions(),
            &[
                StatusAction::Refresh,
                StatusAction::ContactCompany,
                StatusAction::RequestReset
            ]
        );
    }
}
