//! Month cursor and calendar grid construction

use chrono::{Datelike, Duration, Months, NaiveDate};

/// A (year, month) position on the calendar
///
/// Months are zero-based (0 = January), matching chrono's `month0`
/// convention. The cursor pins the first day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    /// Build a cursor for the given year and zero-based month
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month0 + 1, 1).map(|first| MonthCursor { first })
    }

    /// The cursor for the month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        MonthCursor {
            first: date - Duration::days(date.day0() as i64),
        }
    }

    /// Step to the previous month; January wraps to December of the
    /// previous year
    pub fn prev(self) -> Self {
        MonthCursor {
            first: self.first - Months::new(1),
        }
    }

    /// Step to the next month; December wraps to January of the next
    /// year
    pub fn next(self) -> Self {
        MonthCursor {
            first: self.first + Months::new(1),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Zero-based month, 0 = January
    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        (self.next().first - Duration::days(1)).day()
    }

    /// Weekday index of day 1, 0 = Sunday .. 6 = Saturday
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month0() == self.month0()
    }

    pub fn name(&self) -> &'static str {
        match self.month0() {
            0 => "January",
            1 => "February",
            2 => "March",
            3 => "April",
            4 => "May",
            5 => "June",
            6 => "July",
            7 => "August",
            8 => "September",
            9 => "October",
            10 => "November",
            _ => "December",
        }
    }
}

/// One slot in a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before day 1
    Blank,
    /// A day of the month, 1-based
    Day(u32),
}

/// The day layout of a month: leading blanks up to the weekday of day
/// 1, then every day number in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    cursor: MonthCursor,
    cells: Vec<GridCell>,
}

impl CalendarGrid {
    pub fn for_month(cursor: MonthCursor) -> Self {
        let blanks = cursor.first_weekday() as usize;
        let days = cursor.days_in_month();

        let mut cells = Vec::with_capacity(blanks + days as usize);
        cells.extend(std::iter::repeat(GridCell::Blank).take(blanks));
        cells.extend((1..=days).map(GridCell::Day));

        CalendarGrid { cursor, cells }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(year: i32, month0: u32) -> MonthCursor {
        MonthCursor::new(year, month0).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range_month() {
        assert!(MonthCursor::new(2024, 12).is_none());
        assert!(MonthCursor::new(2024, 11).is_some());
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        let c = MonthCursor::from_date(date);
        assert_eq!(c, cursor(2025, 0));
        assert_eq!(c.first_day(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn test_prev_rolls_january_back_a_year() {
        assert_eq!(cursor(2025, 0).prev(), cursor(2024, 11));
    }

    #[test]
    fn test_next_rolls_december_forward_a_year() {
        assert_eq!(cursor(2024, 11).next(), cursor(2025, 0));
    }

    #[test]
    fn test_prev_next_round_trip() {
        let c = cursor(2025, 0);
        assert_eq!(c.prev().next(), c);
        let c = cursor(2024, 11);
        assert_eq!(c.next().prev(), c);
        let c = cursor(2024, 5);
        assert_eq!(c.next().prev(), c);
    }

    #[test]
    fn test_mid_year_steps() {
        assert_eq!(cursor(2024, 5).next(), cursor(2024, 6));
        assert_eq!(cursor(2024, 5).prev(), cursor(2024, 4));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(cursor(2024, 0).days_in_month(), 31);
        assert_eq!(cursor(2024, 1).days_in_month(), 29); // leap year
        assert_eq!(cursor(2025, 1).days_in_month(), 28);
        assert_eq!(cursor(2024, 3).days_in_month(), 30);
    }

    #[test]
    fn test_first_weekday() {
        // 2024-12-01 was a Sunday
        assert_eq!(cursor(2024, 11).first_weekday(), 0);
        // 2024-02-01 was a Thursday
        assert_eq!(cursor(2024, 1).first_weekday(), 4);
    }

    #[test]
    fn test_contains() {
        let c = cursor(2024, 11);
        assert!(c.contains(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()));
        assert!(c.contains(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
        assert!(!c.contains(NaiveDate::from_ymd_opt(2024, 11, 30).unwrap()));
        assert!(!c.contains(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(cursor(2024, 0).name(), "January");
        assert_eq!(cursor(2024, 11).name(), "December");
    }

    #[test]
    fn test_leap_february_grid() {
        let grid = CalendarGrid::for_month(cursor(2024, 1));
        let cells = grid.cells();

        // Four blanks (Thursday start), then 29 numbered days
        assert_eq!(cells.len(), 4 + 29);
        assert!(cells[..4].iter().all(|c| *c == GridCell::Blank));
        assert_eq!(cells[4], GridCell::Day(1));
        assert_eq!(cells[cells.len() - 1], GridCell::Day(29));
    }

    #[test]
    fn test_grid_with_no_leading_blanks() {
        // December 2024 starts on a Sunday
        let grid = CalendarGrid::for_month(cursor(2024, 11));
        assert_eq!(grid.cells().len(), 31);
        assert_eq!(grid.cells()[0], GridCell::Day(1));
    }

    #[test]
    fn test_grid_length_is_offset_plus_days() {
        for month0 in 0..12 {
            let c = cursor(2025, month0);
            let grid = CalendarGrid::for_month(c);
            assert_eq!(
                grid.cells().len(),
                c.first_weekday() as usize + c.days_in_month() as usize
            );
        }
    }
}
