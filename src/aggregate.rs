//! Attendance aggregation.
//!
//! Fans out one cached attendance fetch per event, joins all of them
//! (one failure fails the whole aggregation - no partial ranking is
//! ever produced), then folds every attendance record into per-member
//! tallies and ranks them by count.

use std::collections::HashMap;

use futures::future;
use tracing::debug;

use crate::api::{FetchError, RemoteEventService};
use crate::cache::KeyValueCache;
use crate::fetch::CachedFetcher;
use crate::models::{Attendee, Event, MemberTally};

/// Cache key for one event's attendance list.
fn attendance_key(event_id: &str) -> String {
    format!("event_attendance.{}", event_id)
}

/// Fetch attendance for every event concurrently and produce the
/// ranked member tallies. All fetches are started before any is
/// awaited; completion order does not matter since the fold consumes
/// an unordered multiset of records.
pub async fn aggregate<S, R>(
    fetcher: &CachedFetcher<S>,
    remote: &R,
    group: &str,
    events: &[Event],
) -> Result<Vec<MemberTally>, FetchError>
where
    S: KeyValueCache,
    R: RemoteEventService,
{
    let fetches = events.iter().map(|event| {
        let key = attendance_key(&event.id);
        async move {
            fetcher
                .fetch(&key, || remote.event_attendance(group, &event.id))
                .await
        }
    });

    // All-or-nothing join: a single failed event fetch fails the run.
    let mut attendance = Vec::with_capacity(events.len());
    for result in future::join_all(fetches).await {
        attendance.push(result?.into_attendees());
    }

    debug!(
        events = events.len(),
        records = attendance.iter().map(Vec::len).sum::<usize>(),
        "attendance fetched"
    );

    Ok(rank(attendance))
}

/// Fold attendance records into per-member tallies and sort by count
/// descending.
///
/// Tallies are created in discovery order. The sort is stable
/// ascending followed by a reverse, so equal counts come out ordered
/// by *last* first-seen member first.
pub fn rank(attendance: impl IntoIterator<Item = Vec<Attendee>>) -> Vec<MemberTally> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut tallies: Vec<MemberTally> = Vec::new();

    for attendees in attendance {
        for attendee in attendees {
            match index.get(&attendee.member.id) {
                Some(&i) => tallies[i].count += 1,
                None => {
                    index.insert(attendee.member.id.clone(), tallies.len());
                    tallies.push(MemberTally {
                        member_id: attendee.member.id,
                        name: attendee.member.name,
                        count: 1,
                    });
                }
            }
        }
    }

    tallies.sort_by_key(|tally| tally.count);
    tallies.reverse();
    tallies
}
