//! Day/week/month range predicates over event dates.

use eventcal_core::EventDate;

use crate::event::Event;

/// Half-width of the week window, in days. The window is symmetric around the anchor
/// date and is not aligned to calendar weeks.
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// A range query relative to an anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeQuery {
    /// Same year, month and day as the anchor.
    Day,
    /// Within [`WEEK_WINDOW_DAYS`] days of the anchor, in either direction.
    Week,
    /// Same year and month as the anchor.
    Month,
}

impl RangeQuery {
    pub fn as_str(self) -> &'static str {
        match self {
            RangeQuery::Day => "day",
            RangeQuery::Week => "week",
            RangeQuery::Month => "month",
        }
    }

    pub fn matches(self, anchor: &EventDate, date: &EventDate) -> bool {
        match self {
            RangeQuery::Day => anchor == date,
            RangeQuery::Week => anchor.days_between(date) <= WEEK_WINDOW_DAYS,
            RangeQuery::Month => anchor.year() == date.year() && anchor.month() == date.month(),
        }
    }

    /// Keep the events inside the range, preserving their order.
    pub fn select(self, anchor: &EventDate, events: Vec<Event>) -> Vec<Event> {
        events
            .into_iter()
            .filter(|e| self.matches(anchor, &e.date))
            .collect()
    }
}

impl core::fmt::Display for RangeQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventcal_core::{EventId, UserId};
    use proptest::prelude::*;

    fn date(s: &str) -> EventDate {
        EventDate::parse(s).unwrap()
    }

    fn event(id: i64, on: &str) -> Event {
        Event::new(UserId::new(1), EventId::new(id), date(on), "t", "d")
    }

    fn ids(events: &[Event]) -> Vec<i64> {
        events.iter().map(|e| e.id.get()).collect()
    }

    #[test]
    fn day_matches_exact_date_only() {
        let events = vec![
            event(1, "2023-05-01"),
            event(2, "2023-05-02"),
            event(3, "2023-06-01"),
        ];
        let selected = RangeQuery::Day.select(&date("2023-05-01"), events);
        assert_eq!(ids(&selected), vec![1]);
    }

    #[test]
    fn week_window_is_symmetric_and_inclusive() {
        let anchor = date("2023-05-20");
        let events = vec![
            event(1, "2023-05-15"), // 5 days before
            event(2, "2023-05-11"), // 9 days before
            event(3, "2023-05-13"), // 7 days before
            event(4, "2023-05-27"), // 7 days after
            event(5, "2023-05-28"), // 8 days after
        ];
        let selected = RangeQuery::Week.select(&anchor, events);
        assert_eq!(ids(&selected), vec![1, 3, 4]);
    }

    #[test]
    fn week_window_crosses_month_and_year_boundaries() {
        let anchor = date("2024-01-02");
        assert!(RangeQuery::Week.matches(&anchor, &date("2023-12-28")));
        assert!(!RangeQuery::Week.matches(&anchor, &date("2023-12-25")));
    }

    #[test]
    fn month_requires_both_year_and_month() {
        let anchor = date("2023-05-15");
        let events = vec![
            event(1, "2023-05-01"),
            event(2, "2023-05-31"),
            event(3, "2022-05-15"), // same month, other year
            event(4, "2023-06-15"), // same year, other month
        ];
        let selected = RangeQuery::Month.select(&anchor, events);
        assert_eq!(ids(&selected), vec![1, 2]);
    }

    #[test]
    fn select_preserves_insertion_order() {
        let events = vec![
            event(9, "2023-05-03"),
            event(2, "2023-05-01"),
            event(5, "2023-05-02"),
        ];
        let selected = RangeQuery::Month.select(&date("2023-05-10"), events);
        assert_eq!(ids(&selected), vec![9, 2, 5]);
    }

    proptest! {
        /// Property: the week predicate is symmetric in its two dates.
        #[test]
        fn week_is_symmetric(a in 0i64..20_000, b in 0i64..20_000) {
            let base = date("1990-01-01").as_naive();
            let x = EventDate::from_naive(base + chrono_days(a));
            let y = EventDate::from_naive(base + chrono_days(b));
            prop_assert_eq!(
                RangeQuery::Week.matches(&x, &y),
                RangeQuery::Week.matches(&y, &x)
            );
            prop_assert_eq!(RangeQuery::Week.matches(&x, &y), (a - b).abs() <= WEEK_WINDOW_DAYS);
        }

        /// Property: a day match implies week and month matches.
        #[test]
        fn day_implies_week_and_month(offset in 0i64..20_000) {
            let d = EventDate::from_naive(date("1990-01-01").as_naive() + chrono_days(offset));
            prop_assert!(RangeQuery::Day.matches(&d, &d));
            prop_assert!(RangeQuery::Week.matches(&d, &d));
            prop_assert!(RangeQuery::Month.matches(&d, &d));
        }
    }

    fn chrono_days(n: i64) -> chrono::Duration {
        chrono::Duration::days(n)
    }
}
