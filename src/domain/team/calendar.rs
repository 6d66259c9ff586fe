// SPDX-License-Identifier: MPL-2.0
//! Monday-based calendar weeks for the schedule view.

use chrono::{Datelike, Days, NaiveDate};

/// Seven days starting on a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Week {
    start: NaiveDate,
}

impl Week {
    /// The week that contains `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_monday());
        Self {
            start: date.checked_sub_days(Days::new(offset)).unwrap_or(date),
        }
    }

    /// Monday of the week.
    #[must_use]
    pub fn start(self) -> NaiveDate {
        self.start
    }

    /// Sunday of the week.
    #[must_use]
    pub fn end(self) -> NaiveDate {
        self.start.checked_add_days(Days::new(6)).unwrap_or(self.start)
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self {
            start: self.start.checked_sub_days(Days::new(7)).unwrap_or(self.start),
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self {
            start: self.start.checked_add_days(Days::new(7)).unwrap_or(self.start),
        }
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        (self.start..=self.end()).contains(&date)
    }

    /// Monday through Sunday.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(7)
    }

    /// Header text such as "March 11 - March 17, 2024".
    ///
    /// The year shown is the year of the Sunday.
    #[must_use]
    pub fn header(self) -> String {
        let end = self.end();
        format!(
            "{} - {}, {}",
            self.start.format("%B %-d"),
            end.format("%B %-d"),
            end.year()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn week_starts_on_monday() {
        assert_eq!(Week::containing(date(2024, 3, 13)).start(), date(2024, 3, 11));
        assert_eq!(Week::containing(date(2024, 3, 17)).start(), date(2024, 3, 11));
        assert_eq!(Week::containing(date(2024, 3, 11)).start(), date(2024, 3, 11));
    }

    #[test]
    fn navigation_moves_seven_days() {
        let week = Week::containing(date(2024, 3, 13));
        assert_eq!(week.next().start(), date(2024, 3, 18));
        assert_eq!(week.previous().start(), date(2024, 3, 4));
        assert_eq!(week.next().previous(), week);
    }

    #[test]
    fn header_names_both_ends_and_the_year() {
        assert_eq!(
            Week::containing(date(2024, 1, 24)).header(),
            "January 22 - January 28, 2024"
        );
        assert_eq!(
            Week::containing(date(2024, 12, 31)).header(),
            "December 30 - January 5, 2025"
        );
    }

    #[test]
    fn days_cover_the_whole_week() {
        let week = Week::containing(date(2024, 2, 28));
        let days: Vec<_> = week.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2024, 2, 26));
        assert_eq!(days[6], date(2024, 3, 3));
        assert!(week.contains(date(2024, 2, 29)));
        assert!(!week.contains(date(2024, 3, 4)));
    }
}
