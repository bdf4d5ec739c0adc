//! Data models for Meetup group-events entities.
//!
//! This module contains the structures used to represent group-events
//! data:
//!
//! - `Event`: a single past event, named with a `#<number>` token
//! - `Member`, `Attendee`: who showed up to an event
//! - `MemberTally`: per-member attendance count built during aggregation
//! - `EventsResponse`, `AttendanceResponse`: wire envelopes, either of
//!   which may carry an API-reported `errors` list

pub mod event;
pub mod member;

pub use event::{Event, EventsResponse};
pub use member::{AttendanceResponse, Attendee, Member, MemberTally};

use serde::{Deserialize, Serialize};

/// A single error entry as reported inside an API payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorMessage {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
