use serde::{Deserialize, Serialize};

use super::ApiErrorMessage;
use crate::fetch::Payload;

/// A past event for the group. Events are read-only once fetched;
/// the numbered `#<n>` token in `name` is what the milestone filter
/// keys on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    /// Event start time in epoch milliseconds, when the API provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Envelope for the events listing endpoint: a `results` array on
/// success, or an `errors` list when the API reports a failure inside
/// a 200 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub results: Vec<Event>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorMessage>,
}

impl Payload for EventsResponse {
    fn take_error(&mut self) -> Option<String> {
        self.errors.pop().map(|e| e.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_results_envelope() {
        let json = r#"{"results":[{"id":"qwheqyvfcbpb","name":"VegasJS Meetup #21","time":1421200800000,"status":"past"}]}"#;
        let resp: EventsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].id, "qwheqyvfcbpb");
        assert_eq!(resp.results[0].name, "VegasJS Meetup #21");
        assert!(resp.errors.is_empty());
    }

    #[test]
    fn parses_error_envelope_and_pops_last_message() {
        let json = r#"{"errors":[{"message":"first"},{"message":"Invalid API key","code":"auth_fail"}]}"#;
        let mut resp: EventsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.results.is_empty());
        assert_eq!(resp.take_error().as_deref(), Some("Invalid API key"));
        assert_eq!(resp.take_error().as_deref(), Some("first"));
        assert_eq!(resp.take_error(), None);
    }

    #[test]
    fn events_round_trip_through_cache_bytes() {
        let resp = EventsResponse {
            results: vec![Event {
                id: "abc".into(),
                name: "Meetup #30".into(),
                time: None,
                status: Some("past".into()),
            }],
            errors: vec![],
        };
        let bytes = serde_json::to_vec(&resp).unwrap();
        let back: EventsResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back.results[0].name, "Meetup #30");
    }
}
