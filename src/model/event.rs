use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::types::Side;
use super::utils::{array_at, pick_bool, pick_f32, pick_string, pick_u32};

/// Where the events list lives inside a match detail payload.
pub const EVENTS_POINTER: &str = "/content/matchFacts/events/events";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventKind {
    Goal,
    Card,
    Substitution,
    AddedTime,
    Half,
    Other(String),
}

impl From<String> for EventKind {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "goal" => EventKind::Goal,
            "card" => EventKind::Card,
            "substitution" => EventKind::Substitution,
            "addedtime" => EventKind::AddedTime,
            "half" => EventKind::Half,
            _ => EventKind::Other(raw),
        }
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Goal => "Goal".to_string(),
            EventKind::Card => "Card".to_string(),
            EventKind::Substitution => "Substitution".to_string(),
            EventKind::AddedTime => "AddedTime".to_string(),
            EventKind::Half => "Half".to_string(),
            EventKind::Other(raw) => raw,
        }
    }
}

/// Upstream sends the minute either as a bare number or as text ("45+2", "HT").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeLabel {
    Minute(u32),
    Label(String),
}

impl TimeLabel {
    /// `None` for nulls, negative numbers and anything that is neither number nor string.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n
                .as_u64()
                .map(|m| TimeLabel::Minute(u32::try_from(m).unwrap_or(u32::MAX)))
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| *f >= 0.0)
                        .map(|f| TimeLabel::Minute(f as u32))
                }),
            Value::String(s) => Some(TimeLabel::Label(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeLabel::Minute(m) => write!(f, "{m}"),
            TimeLabel::Label(s) => write!(f, "{s}"),
        }
    }
}

impl From<u32> for TimeLabel {
    fn from(minute: u32) -> Self {
        TimeLabel::Minute(minute)
    }
}

impl From<&str> for TimeLabel {
    fn from(label: &str) -> Self {
        TimeLabel::Label(label.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
    pub player_in: Option<String>,
    pub player_out: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotDetail {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub expected_goals: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEvent {
    pub kind: EventKind,
    pub time: Option<TimeLabel>,
    pub side: Option<Side>,
    pub player: Option<String>,
    pub new_score: Option<(u32, u32)>,
    pub card: Option<String>,
    pub substitution: Option<Substitution>,
    pub shot: Option<ShotDetail>,
}

impl MatchEvent {
    /// Bare event carrying only a kind and a time, mostly useful for building timelines by hand.
    #[must_use]
    pub fn new(kind: EventKind, time: Option<TimeLabel>) -> Self {
        MatchEvent {
            kind,
            time,
            side: None,
            player: None,
            new_score: None,
            card: None,
            substitution: None,
            shot: None,
        }
    }

    /// Decodes one upstream event object. Returns `None` only when `entry` is not an object.
    #[must_use]
    pub fn from_upstream(entry: &Value) -> Option<Self> {
        if !entry.is_object() {
            return None;
        }
        let kind = pick_string(entry, &["type"])
            .map_or_else(|| EventKind::Other(String::new()), EventKind::from);

        Some(MatchEvent {
            kind,
            time: decode_time_label(entry),
            side: pick_bool(entry, &["isHome"]).map(Side::from_is_home),
            player: pick_string(entry, &["nameStr", "player", "fullName"]),
            new_score: decode_new_score(entry.get("newScore")),
            card: pick_string(entry, &["card"]),
            substitution: decode_substitution(entry.get("swap")),
            shot: entry.get("shotmapEvent").and_then(decode_shot),
        })
    }
}

/// Decodes every event found under [`EVENTS_POINTER`], in upstream order.
#[must_use]
pub fn decode_events(match_detail: &Value) -> Vec<MatchEvent> {
    array_at(match_detail, EVENTS_POINTER)
        .iter()
        .filter_map(MatchEvent::from_upstream)
        .collect()
}

fn decode_time_label(entry: &Value) -> Option<TimeLabel> {
    let label = ["timeStr", "halfStrShort", "time"]
        .iter()
        .filter_map(|key| entry.get(*key))
        .find_map(TimeLabel::from_value)?;

    // stoppage time sometimes comes split out as a separate number
    match (label, pick_u32(entry, &["overloadTime"])) {
        (TimeLabel::Minute(minute), Some(added)) if added > 0 => {
            Some(TimeLabel::Label(format!("{minute}+{added}")))
        }
        (label, _) => Some(label),
    }
}

fn decode_new_score(value: Option<&Value>) -> Option<(u32, u32)> {
    let score = value?.as_array()?;
    let home = u32::try_from(score.first()?.as_u64()?).ok()?;
    let away = u32::try_from(score.get(1)?.as_u64()?).ok()?;
    Some((home, away))
}

fn decode_substitution(value: Option<&Value>) -> Option<Substitution> {
    let swap = value?.as_array()?;
    if swap.is_empty() {
        return None;
    }
    let name_at = |idx: usize| swap.get(idx).and_then(|p| pick_string(p, &["name", "fullName"]));
    Some(Substitution {
        player_in: name_at(0),
        player_out: name_at(1),
    })
}

fn decode_shot(value: &Value) -> Option<ShotDetail> {
    if !value.is_object() {
        return None;
    }
    Some(ShotDetail {
        x: pick_f32(value, &["x"]),
        y: pick_f32(value, &["y"]),
        expected_goals: pick_f32(value, &["expectedGoals", "xG"]),
    })
}
