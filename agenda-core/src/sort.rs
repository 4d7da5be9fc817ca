//! Ordering of the event list.

use crate::event::Event;

/// Which field to order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Title,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Transient UI state; never persisted. Defaults to date ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

/// Order `events` by `spec` into a new vector; the input is untouched.
///
/// Titles and locations compare case-insensitively; dates compare on the
/// instant. The sort is stable, so events with equal keys keep their
/// prior relative order and sorting twice changes nothing.
pub fn sort_events(events: &[Event], spec: SortSpec) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match spec.key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Title => fold(&a.title).cmp(&fold(&b.title)),
            SortKey::Location => fold(&a.location).cmp(&fold(&b.location)),
        };
        match spec.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn fold(s: &str) -> String {
    s.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_event(id: i64, title: &str, location: &str, day: u32) -> Event {
        Event {
            id,
            title: title.to_string(),
            description: "Some event".to_string(),
            location: location.to_string(),
            date: Utc.with_ymd_and_hms(2030, 3, day, 15, 0, 0).unwrap(),
            user_id: 1,
        }
    }

    fn make_events() -> Vec<Event> {
        vec![
            make_event(1, "Standup", "Berlin", 22),
            make_event(2, "all hands", "Amsterdam", 20),
            make_event(3, "Budget review", "copenhagen", 21),
        ]
    }

    #[test]
    fn test_date_ascending_is_non_decreasing() {
        let sorted = sort_events(&make_events(), SortSpec::default());

        for pair in sorted.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
        assert_eq!(sorted[0].id, 2);
    }

    #[test]
    fn test_date_descending_is_non_increasing() {
        let spec = SortSpec {
            key: SortKey::Date,
            order: SortOrder::Descending,
        };
        let sorted = sort_events(&make_events(), spec);

        for pair in sorted.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        assert_eq!(sorted[0].id, 1);
    }

    #[test]
    fn test_title_compares_case_insensitively() {
        let spec = SortSpec {
            key: SortKey::Title,
            order: SortOrder::Ascending,
        };
        let sorted = sort_events(&make_events(), spec);

        let titles: Vec<&str> = sorted.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["all hands", "Budget review", "Standup"]);
    }

    #[test]
    fn test_location_descending() {
        let spec = SortSpec {
            key: SortKey::Location,
            order: SortOrder::Descending,
        };
        let sorted = sort_events(&make_events(), spec);

        let locations: Vec<&str> = sorted.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(locations, vec!["copenhagen", "Berlin", "Amsterdam"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let spec = SortSpec {
            key: SortKey::Title,
            order: SortOrder::Descending,
        };
        let once = sort_events(&make_events(), spec);
        let twice = sort_events(&once, spec);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_equal_keys_keep_their_relative_order() {
        let events = vec![
            make_event(10, "Retro", "Oslo", 20),
            make_event(11, "retro", "Lisbon", 21),
            make_event(12, "RETRO", "Madrid", 22),
        ];
        let spec = SortSpec {
            key: SortKey::Title,
            order: SortOrder::Ascending,
        };
        let sorted = sort_events(&events, spec);

        let ids: Vec<i64> = sorted.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let events = make_events();
        let before = events.clone();

        let _ = sort_events(&events, SortSpec::default());

        assert_eq!(events, before);
    }
}
