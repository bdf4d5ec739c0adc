//! REST API client module for the Meetup group-events service.
//!
//! This module provides the `ApiClient` for fetching the group's past
//! event list and per-event attendance, plus the `RemoteEventService`
//! trait the aggregation pipeline is written against so tests can
//! substitute a stub service.

pub mod client;
pub mod error;

use async_trait::async_trait;

use crate::models::{AttendanceResponse, EventsResponse};

pub use client::ApiClient;
pub use error::FetchError;

/// The remote group-events service, as consumed by the pipeline.
///
/// Either call may succeed at the HTTP level yet still carry an
/// `errors` list inside the payload; surfacing those is the cached
/// fetcher's job, not the client's.
#[async_trait]
pub trait RemoteEventService: Send + Sync {
    /// Fetch the group's event list, filtered by status (e.g. "past").
    async fn events(&self, group: &str, status: &str) -> Result<EventsResponse, FetchError>;

    /// Fetch the attendance list for one event.
    async fn event_attendance(
        &self,
        group: &str,
        event_id: &str,
    ) -> Result<AttendanceResponse, FetchError>;
}
