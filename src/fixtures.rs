use ahash::RandomState;
use chrono::DateTime;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::model::{array_at, pick_bool, pick_string, pick_u32};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureTeam {
    pub id: Option<u64>,
    pub name: String,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: u64,
    pub home: FixtureTeam,
    pub away: FixtureTeam,
    pub kickoff: Option<String>,
    pub score: Option<String>,
    pub started: bool,
    pub finished: bool,
    pub cancelled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueFixtures {
    pub id: u64,
    pub name: String,
    pub country_code: Option<String>,
    pub matches: Vec<Fixture>,
}

/// Regroups a day's `leagues[]` payload so every competition appears once.
///
/// Groups sharing a `primaryId` (cup groups, split conferences) are merged
/// under the first one seen. League order follows the payload; matches are
/// ordered by kickoff and then id, with unknown kickoffs last.
#[must_use]
pub fn group_fixtures(payload: &Value) -> Vec<LeagueFixtures> {
    let mut leagues: Vec<LeagueFixtures> = Vec::new();
    let mut index_by_id: HashMap<u64, usize, RandomState> = HashMap::default();

    for league in array_at(payload, "/leagues") {
        let Some(key) = league_key(league) else {
            continue;
        };
        let fixtures = array_at(league, "/matches").iter().filter_map(decode_fixture);

        let idx = *index_by_id.entry(key).or_insert_with(|| {
            leagues.push(LeagueFixtures {
                id: key,
                name: pick_string(league, &["parentLeagueName", "name"]).unwrap_or_default(),
                country_code: pick_string(league, &["ccode", "countryCode"]),
                matches: Vec::new(),
            });
            leagues.len() - 1
        });
        leagues[idx].matches.extend(fixtures);
    }

    for league in &mut leagues {
        league.matches.sort_by_cached_key(|fixture| {
            let kickoff = kickoff_timestamp(fixture);
            (kickoff.is_none(), kickoff, fixture.id)
        });
    }
    leagues
}

fn league_key(league: &Value) -> Option<u64> {
    league
        .get("primaryId")
        .and_then(Value::as_u64)
        .or_else(|| league.get("id").and_then(Value::as_u64))
}

fn kickoff_timestamp(fixture: &Fixture) -> Option<i64> {
    let kickoff = fixture.kickoff.as_deref()?;
    DateTime::parse_from_rfc3339(kickoff)
        .ok()
        .map(|dt| dt.timestamp())
}

fn decode_fixture(value: &Value) -> Option<Fixture> {
    let id = value.get("id").and_then(|id| {
        id.as_u64()
            .or_else(|| id.as_str().and_then(|s| s.trim().parse().ok()))
    })?;
    let status = value.get("status").unwrap_or(&Value::Null);

    Some(Fixture {
        id,
        home: decode_team(value.get("home")),
        away: decode_team(value.get("away")),
        kickoff: pick_string(status, &["utcTime"]).or_else(|| pick_string(value, &["time"])),
        score: pick_string(status, &["scoreStr"]),
        started: pick_bool(status, &["started"]).unwrap_or(false),
        finished: pick_bool(status, &["finished"]).unwrap_or(false),
        cancelled: pick_bool(status, &["cancelled"]).unwrap_or(false),
    })
}

fn decode_team(value: Option<&Value>) -> FixtureTeam {
    let value = value.unwrap_or(&Value::Null);
    FixtureTeam {
        id: value.get("id").and_then(Value::as_u64),
        name: pick_string(value, &["name", "longName"]).unwrap_or_default(),
        score: pick_u32(value, &["score"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture(id: u64, kickoff: Option<&str>) -> Value {
        json!({
            "id": id,
            "home": {"id": 1, "name": "Home", "score": 1},
            "away": {"id": 2, "name": "Away", "score": 0},
            "status": {"utcTime": kickoff, "started": true, "finished": false}
        })
    }

    #[test]
    fn sub_groups_merge_under_primary_id() {
        let payload = json!({"leagues": [
            {"id": 901, "primaryId": 42, "name": "Champions League Grp. A", "parentLeagueName": "Champions League", "matches": [fixture(3, Some("2024-01-01T20:00:00.000Z"))]},
            {"id": 47, "name": "Premier League", "ccode": "ENG", "matches": [fixture(5, Some("2024-01-01T15:00:00Z"))]},
            {"id": 902, "primaryId": 42, "name": "Champions League Grp. B", "matches": [fixture(4, Some("2024-01-01T17:45:00.000Z"))]}
        ]});
        let grouped = group_fixtures(&payload);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].id, 42);
        assert_eq!(grouped[0].name, "Champions League");
        let ids: Vec<u64> = grouped[0].matches.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![4, 3]);
        assert_eq!(grouped[1].country_code.as_deref(), Some("ENG"));
    }

    #[test]
    fn unknown_kickoffs_sort_last_then_by_id() {
        let payload = json!({"leagues": [{"id": 1, "name": "L", "matches": [
            fixture(9, None),
            fixture(8, Some("not a time")),
            fixture(7, Some("2024-03-02T12:30:00Z")),
        ]}]});
        let ids: Vec<u64> = group_fixtures(&payload)[0].matches.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![7, 8, 9]);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let payload = json!({"leagues": [{"name": "no id"}, {"id": 3, "matches": [{"home": {}}, fixture(1, None)]}]});
        let grouped = group_fixtures(&payload);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].matches.len(), 1);
        assert!(group_fixtures(&json!({"error": "x"})).is_empty());
    }
}
