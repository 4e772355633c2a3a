use std::fmt::Write;

use chrono::{Locale, NaiveDate};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::banner::Banner;
use crate::calendar::{Event, GridError, MonthGrid, WEEK_ORDER};

const CELL_WIDTH: usize = 5;
const GRID_WIDTH: usize = 7 * (CELL_WIDTH + 1) - 1;

/// Localized month/year header, centered over the grid.
pub fn format_month_header(grid: &MonthGrid) -> String {
    let first = NaiveDate::from_ymd_opt(grid.year(), grid.month(), 1)
        .map(|date| {
            date.format_localized("%B %Y", Locale::en_US)
                .to_string()
        })
        .unwrap_or_default();

    format!("{first:^width$}", width = GRID_WIDTH)
}

pub fn format_weekday_row() -> String {
    WEEK_ORDER
        .map(|day| {
            let name = day.to_string().to_uppercase();

            format!("{name:^width$}", width = CELL_WIDTH)
        })
        .join(" ")
}

/// The 6x7 grid. Today is bracketed, the selection parenthesised, and days
/// with events carry a trailing dot.
pub fn format_grid(grid: &MonthGrid, selected: NaiveDate, busy: &[NaiveDate]) -> String {
    let mut out = String::new();

    for week in grid.weeks() {
        let row = week
            .iter()
            .map(|cell| {
                let number = format!("{:>2}", cell.day());
                let marked = if cell.today {
                    format!("[{number}]")
                } else if cell.date == selected {
                    format!("({number})")
                } else if cell.in_month {
                    format!(" {number} ")
                } else {
                    // Adjacent-month padding, kept visually quiet.
                    format!(" {number}.")
                };
                let dot = if busy.contains(&cell.date) { "*" } else { " " };

                format!("{marked}{dot}")
            })
            .collect::<Vec<_>>()
            .join(" ");

        let _ = writeln!(out, "{row}");
    }

    out
}

/// Event cards for the selected day, one line per event.
pub fn format_day_events(day: NaiveDate, events: &[&Event]) -> String {
    let mut out = String::new();

    let header = day
        .format_localized("%A, %B %e, %Y", Locale::en_US)
        .to_string();
    let _ = writeln!(out, "Events for {header} ({})", events.len());

    let title_width = events
        .iter()
        .map(|event| event.title.width())
        .max()
        .unwrap_or(0);

    for event in events {
        let span = format!(
            "{} - {}",
            event.start.format("%H:%M"),
            event.end.format("%H:%M")
        );
        let padding = title_width - event.title.width();

        let _ = writeln!(
            out,
            "  {span}  {}{:width$}  [{}]",
            event.title,
            "",
            event.category.label(),
            width = padding,
        );

        if !event.description().is_empty() {
            let _ = writeln!(out, "                 {}", event.description());
        }
    }

    if events.is_empty() {
        let _ = writeln!(out, "  No events scheduled");
    }

    out
}

pub fn format_banners<'a>(banners: impl Iterator<Item = &'a Banner>) -> String {
    let mut out = String::new();

    for banner in banners {
        let label = banner.variant.label();

        match &banner.heading {
            Some(heading) => {
                let _ = writeln!(out, "[{label}] {heading}: {}", banner.body);
            }
            None => {
                let _ = writeln!(out, "[{label}] {}", banner.body);
            }
        }
    }

    out
}

/// The whole dashboard: banners, month grid, selected-day events.
pub fn render_dashboard(app: &App) -> Result<String, GridError> {
    let grid = app.grid()?;
    let indicators = app.manager().indicators(
        grid.start(),
        grid.end(),
        app.filters().month.as_ref(),
    );
    let busy = indicators.keys().copied().collect::<Vec<_>>();

    let events = app
        .manager()
        .events_on(app.selected(), app.filters().day.as_ref())
        .collect::<Vec<_>>();

    let mut out = String::new();

    let banners = format_banners(app.visible_banners());
    if !banners.is_empty() {
        let _ = writeln!(out, "{banners}");
    }

    let _ = writeln!(out, "{}", format_month_header(&grid));
    let _ = writeln!(out, "{}", format_weekday_row());
    let _ = write!(out, "{}", format_grid(&grid, app.selected(), &busy));
    let _ = writeln!(out);
    let _ = write!(out, "{}", format_day_events(app.selected(), &events));

    Ok(out)
}
