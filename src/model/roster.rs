use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::utils::{array_at, pick_f32, pick_string, pick_u32};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardMarker {
    Yellow,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: Option<u64>,
    pub name: String,
    pub shirt_number: Option<u32>,
    pub position: String,
    pub rating: Option<f32>,
    #[serde(default)]
    pub cards: Vec<CardMarker>,
}

impl RosterEntry {
    #[must_use]
    pub fn new(name: &str, position: &str) -> Self {
        RosterEntry {
            id: None,
            name: name.to_string(),
            shirt_number: None,
            position: position.to_string(),
            rating: None,
            cards: Vec::new(),
        }
    }

    /// Decodes one lineup player. Entries without any usable name are skipped.
    #[must_use]
    pub fn from_upstream(value: &Value) -> Option<Self> {
        let name = pick_string(value, &["name", "playerName", "fullName"])
            .or_else(|| value.get("player").and_then(|p| pick_string(p, &["name", "fullName"])))?;
        let performance = value.get("performance").unwrap_or(&Value::Null);

        Some(RosterEntry {
            id: value.get("id").and_then(Value::as_u64),
            name,
            shirt_number: pick_u32(value, &["shirtNumber", "shirt", "number"]),
            position: pick_string(
                value,
                &["position", "positionStringShort", "role", "positionShort", "pos"],
            )
            .unwrap_or_default(),
            rating: pick_f32(performance, &["rating"])
                .or_else(|| value.get("rating").and_then(|r| pick_f32(r, &["num"])))
                .or_else(|| pick_f32(value, &["rating"])),
            cards: decode_cards(performance),
        })
    }
}

/// A team sheet as the lineup endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSheet {
    pub name: String,
    pub formation: String,
    pub starters: Vec<RosterEntry>,
}

impl TeamSheet {
    #[must_use]
    pub fn from_upstream(value: &Value) -> Self {
        TeamSheet {
            name: pick_string(value, &["name"]).unwrap_or_default(),
            formation: pick_string(value, &["formation"]).unwrap_or_default(),
            starters: array_at(value, "/starters")
                .iter()
                .filter_map(RosterEntry::from_upstream)
                .collect(),
        }
    }
}

/// Home and away sheets from a match detail payload; missing sides come back empty.
#[must_use]
pub fn decode_team_sheets(match_detail: &Value) -> (TeamSheet, TeamSheet) {
    let side = |key: &str| {
        match_detail
            .pointer(&format!("/content/lineup/{key}"))
            .map_or_else(|| TeamSheet::from_upstream(&Value::Null), TeamSheet::from_upstream)
    };
    (side("homeTeam"), side("awayTeam"))
}

fn decode_cards(performance: &Value) -> Vec<CardMarker> {
    array_at(performance, "/events")
        .iter()
        .filter_map(|event| pick_string(event, &["type"]))
        .filter_map(|kind| {
            let kind = kind.to_lowercase();
            if kind.contains("red") {
                Some(CardMarker::Red)
            } else if kind.contains("yellow") {
                Some(CardMarker::Yellow)
            } else {
                None
            }
        })
        .collect()
}
