use chrono::{Datelike, Months, NaiveDate, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// Time-of-day as the picker edits it: 12-hour clock plus AM/PM toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub period: Meridiem,
}

impl TimeOfDay {
    pub const fn new(hour: u32, minute: u32, period: Meridiem) -> Self {
        Self {
            hour,
            minute,
            period,
        }
    }

    /// 24-hour conversion; 12 AM is midnight, 12 PM is noon.
    pub fn to_naive(self) -> Option<NaiveTime> {
        let hour = match (self.period, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, hour) => hour,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, hour) => hour + 12,
        };

        NaiveTime::from_hms_opt(hour, self.minute, 0)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let period = match self.period {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        };

        write!(f, "{}:{:02} {period}", self.hour, self.minute)
    }
}

/// Selectable slots offered by the booking dialog, half-hour steps over the
/// working day.
pub const TIME_SLOTS: [TimeOfDay; 18] = [
    TimeOfDay::new(9, 0, Meridiem::Am),
    TimeOfDay::new(9, 30, Meridiem::Am),
    TimeOfDay::new(10, 0, Meridiem::Am),
    TimeOfDay::new(10, 30, Meridiem::Am),
    TimeOfDay::new(11, 0, Meridiem::Am),
    TimeOfDay::new(11, 30, Meridiem::Am),
    TimeOfDay::new(12, 0, Meridiem::Pm),
    TimeOfDay::new(12, 30, Meridiem::Pm),
    TimeOfDay::new(1, 0, Meridiem::Pm),
    TimeOfDay::new(1, 30, Meridiem::Pm),
    TimeOfDay::new(2, 0, Meridiem::Pm),
    TimeOfDay::new(2, 30, Meridiem::Pm),
    TimeOfDay::new(3, 0, Meridiem::Pm),
    TimeOfDay::new(3, 30, Meridiem::Pm),
    TimeOfDay::new(4, 0, Meridiem::Pm),
    TimeOfDay::new(4, 30, Meridiem::Pm),
    TimeOfDay::new(5, 0, Meridiem::Pm),
    TimeOfDay::new(5, 30, Meridiem::Pm),
];

pub const DURATIONS: [&str; 6] = [
    "15 minutes",
    "30 minutes",
    "45 minutes",
    "1 hour",
    "1.5 hours",
    "2 hours",
];

/// Payload handed to the create-booking collaborator on submit.
///
/// Fire and forget: nothing in this crate persists or validates it beyond
/// the form's required-field gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub title: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub duration: String,
    pub location: String,
    pub attendees: String,
    pub description: String,
}

/// Local state of the "Book a Meeting" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeOfDay>,
    pub duration: Option<String>,
    pub location: String,
    pub attendees: String,
    pub description: String,
    picker_month: NaiveDate,
}

impl BookingForm {
    /// An empty form with the picker opened on `month`'s month.
    pub fn new(month: NaiveDate) -> Self {
        Self {
            title: String::new(),
            date: None,
            time: None,
            duration: None,
            location: String::new(),
            attendees: String::new(),
            description: String::new(),
            picker_month: first_of_month(month),
        }
    }

    /// First day of the month the embedded date picker displays.
    pub const fn picker_month(&self) -> NaiveDate {
        self.picker_month
    }

    pub fn picker_prev_month(&mut self) {
        self.picker_month = self.picker_month - Months::new(1);
    }

    pub fn picker_next_month(&mut self) {
        self.picker_month = self.picker_month + Months::new(1);
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
        self.picker_month = first_of_month(date);
    }

    /// Required-field gate for the submit action: title, date, time and
    /// duration must all be set. A boolean, not an error path.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
            && self.date.is_some()
            && self.time.is_some()
            && self.duration.is_some()
    }

    /// Turn the form into a request and clear it, or leave it untouched
    /// when the gate fails.
    pub fn submit(&mut self) -> Option<BookingRequest> {
        if !self.is_valid() {
            return None;
        }

        let month = self.picker_month;
        let form = std::mem::replace(self, Self::new(month));

        Some(BookingRequest {
            title: form.title,
            date: form.date?,
            time: form.time?,
            duration: form.duration?,
            location: form.location,
            attendees: form.attendees,
            description: form.description,
        })
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
