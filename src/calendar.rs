//! Month-grid computation for the events calendar.
//!
//! Dates are compared as exact `YYYY-MM-DD` strings, never by time of day.
//! "Today" is a parameter so the grid stays a pure function; [`today`] is the
//! one helper that reads the host clock.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::Event;

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of month, 1-based.
    pub day: u32,
    /// The cell's date as `YYYY-MM-DD`.
    pub date: String,
    /// Whether any attending event falls on this date.
    pub has_event: bool,
    /// Titles of the attending events on this date, for the hover tooltip.
    pub event_titles: Vec<String>,
    /// Whether this cell is the host's current date.
    pub is_today: bool,
}

/// A computed month of calendar cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    /// Month, 1-based (January = 1).
    pub month: u32,
    /// Empty cells before day 1 in a Sunday-first week row.
    pub leading_blanks: u32,
    /// One cell per day, 1..=days-in-month.
    pub days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// The cell for a given day of month, if in range.
    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.days.get(day.checked_sub(1)? as usize)
    }
}

/// Compute the grid for (`year`, `month`), marking days that carry an event
/// the user is attending and tagging `today` when it falls in this month.
///
/// Only events with `is_attending` count; callers pass the joined-club event
/// view. Returns `None` when `month` is not in `1..=12` or the year is out of
/// calendar range.
pub fn month_grid<'a>(
    year: i32,
    month: u32,
    events: impl IntoIterator<Item = &'a Event>,
    today: NaiveDate,
) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = next_month(year, month);
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    let days_in_month = (first_of_next - first).num_days() as u32;

    let attending: Vec<&Event> = events.into_iter().filter(|e| e.is_attending).collect();

    let days = (1..=days_in_month)
        .map(|day| {
            let date = format!("{year:04}-{month:02}-{day:02}");
            let event_titles: Vec<String> = attending
                .iter()
                .filter(|e| e.date == date)
                .map(|e| e.title.clone())
                .collect();
            CalendarDay {
                day,
                has_event: !event_titles.is_empty(),
                event_titles,
                is_today: today.year() == year && today.month() == month && today.day() == day,
                date,
            }
        })
        .collect();

    Some(MonthGrid {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    })
}

/// The month before (`year`, `month`).
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// The month after (`year`, `month`).
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// The host's current date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_on(date: &str, title: &str, attending: bool) -> Event {
        Event {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.into(),
            date: date.into(),
            is_attending: attending,
            ..Event::default()
        }
    }

    fn grid_for(events: &[Event], year: i32, month: u32, today: NaiveDate) -> MonthGrid {
        month_grid(year, month, events.iter(), today).expect("valid month")
    }

    #[test]
    fn attending_event_marks_its_day() {
        let events = vec![event_on("2025-08-28", "Workshop", true)];
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        let grid = grid_for(&events, 2025, 8, today);

        let cell = grid.day(28).unwrap();
        assert!(cell.has_event);
        assert_eq!(cell.event_titles, vec!["Workshop"]);
        assert!(!grid.day(27).unwrap().has_event);
    }

    #[test]
    fn non_attending_event_is_invisible() {
        let events = vec![event_on("2025-08-28", "Workshop", false)];
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        let grid = grid_for(&events, 2025, 8, today);
        assert!(!grid.day(28).unwrap().has_event);
    }

    #[test]
    fn two_events_on_one_day_share_the_cell() {
        let events = vec![
            event_on("2025-09-12", "Cleanup", true),
            event_on("2025-09-12", "Picnic", true),
        ];
        let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let grid = grid_for(&events, 2025, 9, today);
        assert_eq!(grid.day(12).unwrap().event_titles, vec!["Cleanup", "Picnic"]);
    }

    #[test]
    fn today_is_tagged_only_in_its_own_month() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();

        let august = grid_for(&[], 2025, 8, today);
        assert!(august.day(6).unwrap().is_today);
        assert!(!august.day(7).unwrap().is_today);

        let september = grid_for(&[], 2025, 9, today);
        assert!(september.days.iter().all(|d| !d.is_today));
    }

    #[test]
    fn month_lengths_and_leap_years() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(grid_for(&[], 2025, 2, today).days.len(), 28);
        assert_eq!(grid_for(&[], 2024, 2, today).days.len(), 29);
        assert_eq!(grid_for(&[], 2025, 8, today).days.len(), 31);
        assert_eq!(grid_for(&[], 2025, 9, today).days.len(), 30);
    }

    #[test]
    fn leading_blanks_follow_sunday_first_weeks() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        // August 2025 starts on a Friday.
        assert_eq!(grid_for(&[], 2025, 8, today).leading_blanks, 5);
        // June 2025 starts on a Sunday.
        assert_eq!(grid_for(&[], 2025, 6, today).leading_blanks, 0);
    }

    #[test]
    fn date_strings_are_zero_padded() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        let grid = grid_for(&[], 2025, 8, today);
        assert_eq!(grid.day(3).unwrap().date, "2025-08-03");
    }

    #[test]
    fn invalid_month_yields_none() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 6).unwrap();
        assert!(month_grid(2025, 13, std::iter::empty(), today).is_none());
        assert!(month_grid(2025, 0, std::iter::empty(), today).is_none());
    }

    #[test]
    fn month_navigation_wraps_at_year_boundaries() {
        assert_eq!(prev_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(prev_month(2025, 7), (2025, 6));
        assert_eq!(next_month(2025, 7), (2025, 8));
    }
}
