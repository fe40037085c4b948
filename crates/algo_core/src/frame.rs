//! Action-frame decoding.
//!
//! The engine streams one JSON frame per simulation step while units move.
//! Only two parts matter to the planners: the turn number and the breach
//! events. Each breach event is a positional array:
//!
//! ```text
//! [[x, y], damage, unit_type, unit_id, owner]
//! ```
//!
//! where `owner` is 1 for the agent and 2 for the opponent. Entries that do
//! not have this shape are skipped individually. A `turnInfo` or `events`
//! value of the wrong type reads as absent rather than failing the frame.

use serde::Deserialize;
use serde_json::Value;

use crate::coords::Coordinate;
use crate::error::Result;

/// Wire value identifying the agent as the owner of an event.
pub const SELF_OWNER: u8 = 1;

/// A mobile unit reaching the far edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachEvent {
    /// Edge cell where the unit scored.
    pub location: Coordinate,
    /// Wire owner of the scoring unit (1 = agent, 2 = opponent).
    pub owner: u8,
}

impl BreachEvent {
    /// Decode one positional breach entry.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_array()?;
        let location: Coordinate = serde_json::from_value(fields.first()?.clone()).ok()?;
        let owner = u8::try_from(fields.get(4)?.as_u64()?).ok()?;
        Some(Self { location, owner })
    }

    /// Whether the opponent scored this breach against us.
    #[must_use]
    pub fn is_hostile(&self) -> bool {
        self.owner != SELF_OWNER
    }
}

/// One decoded action frame.
///
/// Both fields stay untyped so a malformed sibling never costs us the
/// breaches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionFrame {
    #[serde(rename = "turnInfo", default)]
    turn_info: Value,
    #[serde(default)]
    events: Value,
}

impl ActionFrame {
    /// Parse a raw frame. Missing `events` or `breach` keys are not errors.
    pub fn from_json(raw: &str) -> Result<Self> {
        let frame: ActionFrame = serde_json::from_str(raw)?;
        Ok(frame)
    }

    /// Turn number the frame belongs to, when present.
    #[must_use]
    pub fn turn_number(&self) -> Option<u32> {
        self.turn_info
            .get(1)
            .and_then(Value::as_u64)
            .and_then(|t| u32::try_from(t).ok())
    }

    /// Well-formed breach events. Malformed entries are dropped.
    #[must_use]
    pub fn breaches(&self) -> Vec<BreachEvent> {
        let Some(entries) = self.events.get("breach").and_then(Value::as_array) else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(|entry| {
                let event = BreachEvent::from_value(entry);
                if event.is_none() {
                    tracing::debug!(%entry, "Skipping malformed breach entry");
                }
                event
            })
            .collect()
    }

    /// Breaches scored by the opponent.
    #[must_use]
    pub fn hostile_breaches(&self) -> Vec<BreachEvent> {
        self.breaches()
            .into_iter()
            .filter(BreachEvent::is_hostile)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_breaches_and_turn() {
        let raw = r#"{
            "turnInfo": [1, 7, 42],
            "events": {
                "breach": [
                    [[5, 0], 1, 3, "17", 2],
                    [[22, 27], 1, 3, "18", 1]
                ],
                "damage": []
            }
        }"#;
        let frame = ActionFrame::from_json(raw).unwrap();
        assert_eq!(frame.turn_number(), Some(7));

        let breaches = frame.breaches();
        assert_eq!(breaches.len(), 2);
        assert_eq!(breaches[0].location, Coordinate::new(5, 0));
        assert!(breaches[0].is_hostile());
        assert!(!breaches[1].is_hostile());

        assert_eq!(
            frame.hostile_breaches(),
            vec![BreachEvent {
                location: Coordinate::new(5, 0),
                owner: 2
            }]
        );
    }

    #[test]
    fn test_missing_events_is_empty() {
        let frame = ActionFrame::from_json(r#"{"turnInfo": [1, 3]}"#).unwrap();
        assert!(frame.breaches().is_empty());

        let frame = ActionFrame::from_json(r#"{"events": {}}"#).unwrap();
        assert!(frame.breaches().is_empty());
        assert_eq!(frame.turn_number(), None);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let raw = r#"{"events": {"breach": [
            "nonsense",
            [[5], 1, 3, "1", 2],
            [[3, 10], 1, 3, "2"],
            [[3, 10], 1, 3, "2", 2]
        ]}}"#;
        let frame = ActionFrame::from_json(raw).unwrap();
        let breaches = frame.breaches();
        assert_eq!(breaches.len(), 1);
        assert_eq!(breaches[0].location, Coordinate::new(3, 10));
    }

    #[test]
    fn test_mistyped_turn_info_keeps_breaches() {
        for turn_info in ["null", "7", r#"{"turn": 3}"#, r#""1,3""#] {
            let raw = format!(
                r#"{{"turnInfo": {turn_info}, "events": {{"breach": [[[5, 0], 1, 3, "1", 2]]}}}}"#
            );
            let frame = ActionFrame::from_json(&raw).unwrap();
            assert_eq!(frame.turn_number(), None, "{turn_info}");
            assert_eq!(frame.hostile_breaches().len(), 1, "{turn_info}");
        }
    }

    #[test]
    fn test_mistyped_events_read_as_empty() {
        for events in ["null", "[]", r#"{"breach": null}"#, r#"{"breach": 4}"#] {
            let raw = format!(r#"{{"turnInfo": [1, 3], "events": {events}}}"#);
            let frame = ActionFrame::from_json(&raw).unwrap();
            assert!(frame.breaches().is_empty(), "{events}");
            assert_eq!(frame.turn_number(), Some(3), "{events}");
        }
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(ActionFrame::from_json("{not json").is_err());
    }
}
