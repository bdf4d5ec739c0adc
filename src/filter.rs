//! Milestone event filter.
//!
//! Group events carry a running number in their name ("VegasJS Meetup
//! #21"); attendance is only counted from the milestone meetup onward.

use crate::models::Event;

/// First event included in attendance counts. Earlier meetups predate
/// the group's regular schedule.
pub const MILESTONE_EVENT_NUMBER: u32 = 21;

/// Parse the running number from an event name: the digits directly
/// after the first `#`. Returns None when there is no such token.
pub fn event_number(name: &str) -> Option<u32> {
    let (_, rest) = name.split_once('#')?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Keep the events numbered at or after the milestone. Events without
/// a number token are dropped, not an error.
pub fn since_milestone(events: Vec<Event>) -> Vec<Event> {
    events
        .into_iter()
        .filter(|event| {
            event_number(&event.name).is_some_and(|n| n >= MILESTONE_EVENT_NUMBER)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str) -> Event {
        Event {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            time: None,
            status: Some("past".into()),
        }
    }

    #[test]
    fn parses_number_token() {
        assert_eq!(event_number("Meetup #21"), Some(21));
        assert_eq!(event_number("VegasJS Meetup #7: Lightning Talks"), Some(7));
        assert_eq!(event_number("Social Night"), None);
        assert_eq!(event_number("Hash # then nothing"), None);
    }

    #[test]
    fn keeps_milestone_and_later() {
        let events = vec![
            event("Meetup #20"),
            event("Meetup #21"),
            event("Meetup #22"),
            event("Social Night"),
        ];
        let kept = since_milestone(events);
        let names: Vec<&str> = kept.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Meetup #21", "Meetup #22"]);
    }

    #[test]
    fn unnumbered_events_are_silently_dropped() {
        let kept = since_milestone(vec![event("Holiday Party"), event("Planning Session")]);
        assert!(kept.is_empty());
    }
}
