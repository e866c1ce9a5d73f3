//! Date ranges and named report periods
//!
//! Every range is inclusive at both ends, so a range from a date to itself
//! covers one day.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinanceError;

/// An inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range; fails if `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FinanceError> {
        if start > end {
            return Err(FinanceError::Validation(format!(
                "Range start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// The `days` days before `today` plus `today` itself
    pub fn trailing(today: NaiveDate, days: i64) -> Self {
        Self {
            start: today - Duration::days(days.max(0)),
            end: today,
        }
    }

    /// First day of `today`'s month through `today`
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            start: today.with_day(1).unwrap_or(today),
            end: today,
        }
    }

    /// The whole calendar month
    pub fn month(month: u32, year: i32) -> Result<Self, FinanceError> {
        let invalid = || FinanceError::Validation(format!("Invalid month: {}/{}", month, year));

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;

        Ok(Self {
            start,
            end: next - Duration::days(1),
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, counting both endpoints
    pub fn day_count(&self) -> usize {
        ((self.end - self.start).num_days() + 1).max(0) as usize
    }

    /// Every date in the range, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.day_count() as i64).map(move |offset| start + Duration::days(offset))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Named trailing windows offered by the report screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportPeriod {
    Last7Days,
    Last30Days,
    Last3Months,
    LastYear,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        Self::Last7Days,
        Self::Last30Days,
        Self::Last3Months,
        Self::LastYear,
    ];

    /// Offset in days from today to the start of the window
    pub fn days(&self) -> i64 {
        match self {
            Self::Last7Days => 7,
            Self::Last30Days => 30,
            Self::Last3Months => 90,
            Self::LastYear => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last3Months => "Last 3 months",
            Self::LastYear => "Last year",
        }
    }

    pub fn range(&self, today: NaiveDate) -> DateRange {
        DateRange::trailing(today, self.days())
    }

    /// Lenient lookup that maps any unknown name to the widest window.
    ///
    /// Kept for callers that must accept free-form input the way the old
    /// report screen did; prefer `parse`, which rejects unknown names.
    pub fn parse_or_widest(s: &str) -> Self {
        s.parse().unwrap_or(Self::LastYear)
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportPeriod {
    type Err = FinanceError;

    /// Accepts the display labels (case-insensitive) and short forms
    /// "7d", "30d", "90d", "365d"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| {
                p.label().to_lowercase() == normalized || format!("{}d", p.days()) == normalized
            })
            .ok_or_else(|| FinanceError::UnknownPeriod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_count_inclusive() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 5)).unwrap();
        assert_eq!(range.day_count(), 5);
        assert_eq!(range.days().count(), 5);

        let single = DateRange::new(date(2025, 1, 1), date(2025, 1, 1)).unwrap();
        assert_eq!(single.day_count(), 1);
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(DateRange::new(date(2025, 1, 5), date(2025, 1, 1)).is_err());
    }

    #[test]
    fn test_trailing_window() {
        let range = DateRange::trailing(date(2025, 3, 31), 30);
        assert_eq!(range.start, date(2025, 3, 1));
        assert_eq!(range.day_count(), 31);
    }

    #[test]
    fn test_month_to_date() {
        let range = DateRange::month_to_date(date(2025, 2, 14));
        assert_eq!(range.start, date(2025, 2, 1));
        assert_eq!(range.end, date(2025, 2, 14));
    }

    #[test]
    fn test_month_range() {
        let feb = DateRange::month(2, 2024).unwrap();
        assert_eq!(feb.end, date(2024, 2, 29));

        let dec = DateRange::month(12, 2025).unwrap();
        assert_eq!(dec.start, date(2025, 12, 1));
        assert_eq!(dec.end, date(2025, 12, 31));

        assert!(DateRange::month(13, 2025).is_err());
    }

    #[test]
    fn test_report_period_parse() {
        assert_eq!(
            "Last 30 days".parse::<ReportPeriod>().unwrap(),
            ReportPeriod::Last30Days
        );
        assert_eq!(
            "last 3 months".parse::<ReportPeriod>().unwrap(),
            ReportPeriod::Last3Months
        );
        assert_eq!("7d".parse::<ReportPeriod>().unwrap(), ReportPeriod::Last7Days);
        assert!(matches!(
            "Last decade".parse::<ReportPeriod>(),
            Err(FinanceError::UnknownPeriod(_))
        ));
    }

    #[test]
    fn test_parse_or_widest_falls_back() {
        assert_eq!(ReportPeriod::parse_or_widest("whenever"), ReportPeriod::LastYear);
        assert_eq!(ReportPeriod::parse_or_widest("7d"), ReportPeriod::Last7Days);
    }

    #[test]
    fn test_report_period_range() {
        let range = ReportPeriod::Last7Days.range(date(2025, 1, 10));
        assert_eq!(range.start, date(2025, 1, 3));
        assert_eq!(range.end, date(2025, 1, 10));
    }
}
