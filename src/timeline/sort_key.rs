use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::model::TimeLabel;

// ascii digits only; `\d` would also accept other scripts' numerals
static MINUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)(?:\+([0-9]+))?").expect("minute pattern is a valid regex")
});

pub const PHASE_FIRST_HALF: u8 = 0;
pub const PHASE_HALF_TIME: u8 = 1;
pub const PHASE_SECOND_HALF: u8 = 2;
pub const PHASE_BEYOND_NINETY: u8 = 3;
pub const PHASE_FULL_TIME: u8 = 4;

/// Ordering key for a timeline entry. Field order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortKey {
    pub phase: u8,
    pub minute: u32,
    pub added_minute: u32,
}

impl SortKey {
    #[must_use]
    pub const fn new(phase: u8, minute: u32, added_minute: u32) -> Self {
        SortKey {
            phase,
            minute,
            added_minute,
        }
    }

    #[must_use]
    pub fn as_tuple(&self) -> (u8, u32, u32) {
        (self.phase, self.minute, self.added_minute)
    }

    fn at_minute(minute: u32, added_minute: u32) -> Self {
        SortKey::new(phase_for_minute(minute), minute, added_minute)
    }
}

#[must_use]
pub fn phase_for_minute(minute: u32) -> u8 {
    match minute {
        0..=45 => PHASE_FIRST_HALF,
        46..=90 => PHASE_SECOND_HALF,
        _ => PHASE_BEYOND_NINETY,
    }
}

/// Computes the ordering key for a (possibly missing) time label. Never fails.
#[must_use]
pub fn sort_key(label: Option<&TimeLabel>) -> SortKey {
    match label {
        None => SortKey::default(),
        Some(TimeLabel::Minute(minute)) => SortKey::at_minute(*minute, 0),
        Some(TimeLabel::Label(text)) => label_sort_key(text),
    }
}

// Markers must match the whole label; padded text only gets the leading-digit rules.
fn label_sort_key(text: &str) -> SortKey {
    if text.is_empty() {
        return SortKey::default();
    }
    if text.eq_ignore_ascii_case("HT") || text.eq_ignore_ascii_case("Half Time") {
        return SortKey::new(PHASE_HALF_TIME, 45, 99);
    }
    if text.eq_ignore_ascii_case("FT") || text.eq_ignore_ascii_case("Full Time") {
        return SortKey::new(PHASE_FULL_TIME, 999, 0);
    }
    if text.eq_ignore_ascii_case("Second Half") {
        return SortKey::new(PHASE_SECOND_HALF, 46, 0);
    }

    match MINUTE_PATTERN.captures(text) {
        Some(caps) => {
            let minute = caps.get(1).map_or(0, |m| parse_minute(m.as_str()));
            let added = caps.get(2).map_or(0, |m| parse_minute(m.as_str()));
            SortKey::at_minute(minute, added)
        }
        // no leading digits, so there is no minute to recover
        None => SortKey::at_minute(0, 0),
    }
}

// absurdly long digit runs still sort after every real minute
fn parse_minute(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}
