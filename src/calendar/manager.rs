use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::config::CategoryFilter;

use super::{events_on_day, Category, Event, EventSource};

/// Owns the displayed event list and answers the date queries of the
/// individual surfaces.
#[derive(Debug, Default)]
pub struct Manager {
    events: Vec<Event>,
}

impl Manager {
    pub fn new(source: &dyn EventSource) -> Self {
        Self {
            events: source.list(),
        }
    }

    /// Replace the whole event list. Returns true when it changed.
    pub fn replace(&mut self, events: Vec<Event>) -> bool {
        let old = std::mem::replace(&mut self.events, events);

        old != self.events
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events starting on `day`, in supply order.
    pub fn events_on<'a>(
        &'a self,
        day: NaiveDate,
        filter: Option<&'a CategoryFilter>,
    ) -> impl Iterator<Item = &'a Event> {
        events_on_day(&self.events, day)
            .filter(move |event| filter.is_none_or(|filter| filter.is_included(event.category)))
    }

    /// Events starting within `start..=end`, in supply order.
    pub fn events_between<'a>(
        &'a self,
        start: NaiveDate,
        end: NaiveDate,
        filter: Option<&'a CategoryFilter>,
    ) -> impl Iterator<Item = &'a Event> {
        self.events
            .iter()
            .filter(move |event| (start..=end).contains(&event.start_date()))
            .filter(move |event| filter.is_none_or(|filter| filter.is_included(event.category)))
    }

    /// Which categories have events on each day of `start..=end`, for the
    /// month grid's per-day indicator dots.
    pub fn indicators(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        filter: Option<&CategoryFilter>,
    ) -> BTreeMap<NaiveDate, BTreeSet<Category>> {
        self.events_between(start, end, filter).fold(
            BTreeMap::new(),
            |mut map: BTreeMap<NaiveDate, BTreeSet<Category>>, event| {
                map.entry(event.start_date()).or_default().insert(event.category);

                map
            },
        )
    }
}
