use serde::Serialize;

use super::ProspectiveMember;

/// Where a form submission ended up. Signups that pass validation are
/// persisted before reaching `Registered`; contact messages are never
/// stored and stop at `DraftReady`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Rejected { reason: String },
    Registered { member: ProspectiveMember, mailto: String },
    DraftReady { mailto: String },
}
