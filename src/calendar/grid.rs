use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Cells of a month view: 6 weeks of 7 days.
pub const GRID_CELLS: usize = 42;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("month {0} is out of range (expected 1-12)")]
    InvalidMonth(u32),
    #[error("year {0} is not representable")]
    OutOfRange(i32),
}

/// One cell of a month grid. May belong to the previous or next month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
    pub today: bool,
}

impl CalendarDay {
    /// Day-of-month number as shown in the cell (1-31).
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// A fully materialized 42-cell month view, Sunday-aligned.
///
/// Rebuilt wholesale on every month navigation; cells are never mutated
/// in place.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Build the grid for `month`/`year` (months are 1-based, as chrono).
    ///
    /// The grid starts on the Sunday on or before the 1st and always
    /// contains exactly [`GRID_CELLS`] consecutive days, padded with
    /// adjacent-month days. `today` flags the single matching cell when it
    /// falls inside the displayed month; padding cells are never flagged.
    pub fn build(year: i32, month: u32, today: NaiveDate) -> Result<Self, GridError> {
        if !(1..=12).contains(&month) {
            return Err(GridError::InvalidMonth(month));
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(GridError::OutOfRange(year))?;
        let start = first
            .checked_sub_days(Days::new(u64::from(first.weekday().num_days_from_sunday())))
            .ok_or(GridError::OutOfRange(year))?;

        // The last cell must be representable too, or iteration would panic.
        start
            .checked_add_days(Days::new(GRID_CELLS as u64 - 1))
            .ok_or(GridError::OutOfRange(year))?;

        let days = start
            .iter_days()
            .take(GRID_CELLS)
            .map(|date| {
                let in_month = date.month() == month && date.year() == year;

                CalendarDay {
                    date,
                    in_month,
                    today: in_month && date == today,
                }
            })
            .collect();

        Ok(Self { year, month, days })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    /// First visible cell, on or before the 1st of the month.
    pub fn start(&self) -> NaiveDate {
        self.days[0].date
    }

    /// Last visible cell.
    pub fn end(&self) -> NaiveDate {
        self.days[GRID_CELLS - 1].date
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// The grid as 6 rows of 7 cells, for row-wise rendering.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }
}

/// Weekday column order of the grid, Sunday first.
pub const WEEK_ORDER: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];
