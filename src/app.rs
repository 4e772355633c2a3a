use chrono::{Datelike, Months, NaiveDate};

use crate::banner::{Banner, BannerBoard};
use crate::booking::{BookingForm, BookingRequest, TimeOfDay};
use crate::calendar::{GridError, Manager, MonthGrid};
use crate::config;

/// Everything the dashboard reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PrevMonth,
    NextMonth,
    GoToToday,
    SelectDate(NaiveDate),

    OpenBooking,
    CancelBooking,
    SubmitBooking,
    SetTitle(String),
    SetTime(TimeOfDay),
    SetDuration(String),
    SetLocation(String),
    SetAttendees(String),
    SetDescription(String),
    PickDate(NaiveDate),
    PickerPrevMonth,
    PickerNextMonth,

    DismissBanner(String),
    ResetDismissed,
}

/// Outward call requested by an update. Terminal and fire-and-forget; the
/// collaborator owns whatever happens next.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CreateBooking(BookingRequest),
}

/// Dashboard state: displayed month, selected day, booking dialog and
/// banner board. All mutation goes through [`App::update`].
pub struct App {
    manager: Manager,
    banners: Vec<Banner>,
    board: BannerBoard,
    form: BookingForm,
    today: NaiveDate,
    displayed: NaiveDate,
    selected: NaiveDate,
    dialog_open: bool,
    filters: config::Calendars,
}

impl App {
    pub fn new(manager: Manager, banners: Vec<Banner>, filters: config::Calendars, today: NaiveDate) -> Self {
        Self {
            manager,
            banners,
            board: BannerBoard::default(),
            form: BookingForm::new(today),
            today,
            displayed: first_of_month(today),
            selected: today,
            dialog_open: false,
            filters,
        }
    }

    pub const fn manager(&self) -> &Manager {
        &self.manager
    }

    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    pub const fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// First day of the displayed month.
    pub const fn displayed(&self) -> NaiveDate {
        self.displayed
    }

    pub const fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub const fn form(&self) -> &BookingForm {
        &self.form
    }

    pub const fn board(&self) -> &BannerBoard {
        &self.board
    }

    pub fn visible_banners(&self) -> impl Iterator<Item = &Banner> {
        self.board.visible(&self.banners)
    }

    pub const fn filters(&self) -> &config::Calendars {
        &self.filters
    }

    /// The 42-cell grid of the displayed month, rebuilt on every call.
    pub fn grid(&self) -> Result<MonthGrid, GridError> {
        MonthGrid::build(self.displayed.year(), self.displayed.month(), self.today)
    }

    /// Grid of the month the booking dialog's date picker shows.
    pub fn picker_grid(&self) -> Result<MonthGrid, GridError> {
        let month = self.form.picker_month();

        MonthGrid::build(month.year(), month.month(), self.today)
    }

    pub fn update(&mut self, message: Message) -> Option<Effect> {
        match message {
            // Month navigation recomputes the grid only; the selection is
            // deliberately left alone.
            Message::PrevMonth => self.displayed = self.displayed - Months::new(1),
            Message::NextMonth => self.displayed = self.displayed + Months::new(1),
            Message::GoToToday => {
                self.displayed = first_of_month(self.today);
                self.selected = self.today;
            }
            Message::SelectDate(date) => self.selected = date,

            Message::OpenBooking => {
                self.form = BookingForm::new(self.selected);
                self.dialog_open = true;
            }
            Message::CancelBooking => self.dialog_open = false,
            Message::SubmitBooking => {
                let request = self.form.submit()?;

                self.dialog_open = false;
                log::info!(
                    "booking meeting: {} on {} at {} for {}",
                    request.title,
                    request.date,
                    request.time,
                    request.duration
                );

                return Some(Effect::CreateBooking(request));
            }
            Message::SetTitle(title) => self.form.title = title,
            Message::SetTime(time) => self.form.time = Some(time),
            Message::SetDuration(duration) => self.form.duration = Some(duration),
            Message::SetLocation(location) => self.form.location = location,
            Message::SetAttendees(attendees) => self.form.attendees = attendees,
            Message::SetDescription(description) => self.form.description = description,
            Message::PickDate(date) => self.form.select_date(date),
            Message::PickerPrevMonth => self.form.picker_prev_month(),
            Message::PickerNextMonth => self.form.picker_next_month(),

            Message::DismissBanner(id) => self.board.dismiss(id),
            Message::ResetDismissed => self.board.reset(),
        };

        None
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
