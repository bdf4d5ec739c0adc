use serde::{Deserialize, Serialize};

use super::ApiErrorMessage;
use crate::fetch::Payload;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
}

/// One attendance record, one per (event, member) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendee {
    pub member: Member,
}

/// The attendance endpoint returns a flat array on success, but an
/// object carrying `errors` on API-reported failure. Untagged so both
/// shapes round-trip through the cache unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttendanceResponse {
    Failure { errors: Vec<ApiErrorMessage> },
    Attendees(Vec<Attendee>),
}

impl AttendanceResponse {
    /// Unwrap the attendee list. A `Failure` whose errors were already
    /// consumed yields an empty list.
    pub fn into_attendees(self) -> Vec<Attendee> {
        match self {
            AttendanceResponse::Attendees(attendees) => attendees,
            AttendanceResponse::Failure { .. } => Vec::new(),
        }
    }
}

impl Payload for AttendanceResponse {
    fn take_error(&mut self) -> Option<String> {
        match self {
            AttendanceResponse::Failure { errors } => errors.pop().map(|e| e.message),
            AttendanceResponse::Attendees(_) => None,
        }
    }
}

/// Attendance count for one member across the processed event set.
/// Built in discovery order during aggregation; that order is the
/// tie-break for the final ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberTally {
    pub member_id: String,
    pub name: String,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_attendee_array() {
        let json = r#"[{"member":{"id":"a1","name":"Alice"}},{"member":{"id":"b2","name":"Bob"}}]"#;
        let resp: AttendanceResponse = serde_json::from_str(json).unwrap();
        let attendees = resp.into_attendees();
        assert_eq!(attendees.len(), 2);
        assert_eq!(attendees[0].member.name, "Alice");
    }

    #[test]
    fn parses_error_object() {
        let json = r#"{"errors":[{"message":"Event not found"}]}"#;
        let mut resp: AttendanceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.take_error().as_deref(), Some("Event not found"));
        assert!(resp.into_attendees().is_empty());
    }

    #[test]
    fn attendee_array_carries_no_error() {
        let mut resp = AttendanceResponse::Attendees(vec![]);
        assert_eq!(resp.take_error(), None);
    }
}
