use serde::Serialize;

use super::sort_key::{SortKey, sort_key};
use crate::model::{MatchEvent, TimeLabel};

/// Anything that carries a raw match-time label.
pub trait Timed {
    fn time_label(&self) -> Option<&TimeLabel>;

    fn sort_key(&self) -> SortKey {
        sort_key(self.time_label())
    }
}

impl Timed for MatchEvent {
    fn time_label(&self) -> Option<&TimeLabel> {
        self.time.as_ref()
    }
}

impl Timed for TimeLabel {
    fn time_label(&self) -> Option<&TimeLabel> {
        Some(self)
    }
}

impl<T: Timed> Timed for &T {
    fn time_label(&self) -> Option<&TimeLabel> {
        (**self).time_label()
    }
}

/// Orders entries chronologically in place. The sort is stable, so ties keep input order.
pub fn sort_timeline_in_place<T: Timed>(entries: &mut [T]) {
    entries.sort_by_key(Timed::sort_key);
}

#[must_use]
pub fn sort_timeline<T: Timed>(mut entries: Vec<T>) -> Vec<T> {
    sort_timeline_in_place(&mut entries);
    entries
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    #[serde(flatten)]
    pub event: MatchEvent,
    pub sort_key: SortKey,
}

/// Sorted events paired with the key that placed them.
#[must_use]
pub fn build_timeline(events: Vec<MatchEvent>) -> Vec<TimelineEntry> {
    sort_timeline(events)
        .into_iter()
        .map(|event| {
            let sort_key = event.sort_key();
            TimelineEntry { event, sort_key }
        })
        .collect()
}
