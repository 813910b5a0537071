use serde::Serialize;

use super::position::{PositionCategory, classify_position};
use super::templates::{FormationTemplate, default_template, find_template};
use crate::model::{RosterEntry, Side};

const MAX_PLAYERS_PER_LINE: u32 = 5;
const MAX_OUTFIELD_PLAYERS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAssignment<'a> {
    pub player: &'a RosterEntry,
    pub category: PositionCategory,
    pub x: f32,
    pub y: f32,
}

/// Normalized formation key for a raw label, or `None` when the label can't name one.
///
/// Everything but digits and hyphens is dropped, the rest is split on hyphens and
/// only parts in `1..=5` survive. At least two parts summing to no more than ten
/// are needed.
#[must_use]
pub fn normalize_formation(label: &str) -> Option<String> {
    let cleaned: String = label
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    let parts: Vec<u32> = cleaned
        .split('-')
        .filter_map(|part| part.parse::<u32>().ok())
        .filter(|n| (1..=MAX_PLAYERS_PER_LINE).contains(n))
        .collect();

    if parts.len() < 2 || parts.iter().sum::<u32>() > MAX_OUTFIELD_PLAYERS {
        return None;
    }
    Some(
        parts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-"),
    )
}

/// Template for a raw formation label. Anything unusable falls back to 4-4-2.
#[must_use]
pub fn resolve_formation(label: &str) -> &'static FormationTemplate {
    normalize_formation(label)
        .and_then(|key| find_template(&key))
        .unwrap_or_else(default_template)
}

/// Stable sort of the roster into goalkeeper, defense, midfield, attack order.
#[must_use]
pub fn sort_roster(players: &[RosterEntry]) -> Vec<(&RosterEntry, PositionCategory)> {
    let mut sorted: Vec<_> = players
        .iter()
        .map(|player| (player, classify_position(&player.position)))
        .collect();
    sorted.sort_by_key(|(_, category)| category.priority());
    sorted
}

/// Pairs sorted players with template slots index for index.
///
/// Away coordinates mirror the vertical axis so both teams share one pitch.
/// Surplus players or slots are dropped.
#[must_use]
pub fn layout_lineup<'a>(
    formation_label: &str,
    players: &'a [RosterEntry],
    side: Side,
) -> Vec<PositionAssignment<'a>> {
    let template = resolve_formation(formation_label);
    sort_roster(players)
        .into_iter()
        .zip(template.slots.iter())
        .map(|((player, category), slot)| {
            let y = match side {
                Side::Home => slot.y,
                Side::Away => 100.0 - slot.y,
            };
            PositionAssignment {
                player,
                category,
                x: slot.x,
                y,
            }
        })
        .collect()
}
