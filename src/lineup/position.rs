use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionCategory {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
    Unclassified,
}

// Checked top to bottom, so "Defensive Midfielder" lands on midfield and
// "Wing-Back" on defense before the attacker tokens get a look.
const CATEGORY_TOKENS: &[(PositionCategory, &[&str])] = &[
    (PositionCategory::Goalkeeper, &["goalkeeper", "keeper", "gk"]),
    (PositionCategory::Defender, &["defender", "back", "cb", "lb", "rb"]),
    (
        PositionCategory::Midfielder,
        &["midfield", "mid", "cdm", "cam", "cm", "dm", "am", "lm", "rm"],
    ),
    (
        PositionCategory::Attacker,
        &["forward", "striker", "attack", "wing", "st", "cf", "lw", "rw", "fw"],
    ),
];

impl PositionCategory {
    /// Lower sorts earlier; unclassified labels go last.
    #[must_use]
    pub fn priority(self) -> u16 {
        match self {
            PositionCategory::Goalkeeper => 0,
            PositionCategory::Defender => 1,
            PositionCategory::Midfielder => 2,
            PositionCategory::Attacker => 3,
            PositionCategory::Unclassified => 999,
        }
    }
}

/// Classifies a free-text position label by case-folded substring match.
#[must_use]
pub fn classify_position(label: &str) -> PositionCategory {
    let folded = label.trim().to_lowercase();
    if folded.is_empty() {
        return PositionCategory::Unclassified;
    }
    CATEGORY_TOKENS
        .iter()
        .find(|(_, tokens)| tokens.iter().any(|token| folded.contains(token)))
        .map_or(PositionCategory::Unclassified, |(category, _)| *category)
}
