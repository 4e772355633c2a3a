use chrono::{NaiveDate, NaiveDateTime};

use super::{Category, Event};

/// Capability that supplies the event list to display.
///
/// The dashboard consumes the list read-only and wholesale; sources decide
/// where the data comes from (built-in demo set, config file, ...).
pub trait EventSource {
    fn list(&self) -> Vec<Event>;
}

/// Built-in demo data set (March 2024 CRM activities).
///
/// Defined once here so the individual surfaces stop carrying their own
/// copies of the fixture.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleEvents;

impl EventSource for SampleEvents {
    fn list(&self) -> Vec<Event> {
        fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 3, day)
                .and_then(|date| date.and_hms_opt(hour, minute, 0))
                .unwrap_or_default()
        }

        let entries = [
            ("Discovery Call - TechCorp", 1, (10, 0), (11, 0), Category::Important),
            ("Sales Meeting - Acme Inc", 3, (14, 0), (15, 0), Category::Important),
            ("Client Lunch - StartupXYZ", 5, (12, 0), (13, 0), Category::Fun),
            ("Contract Negotiation - GlobalTech", 7, (10, 0), (11, 30), Category::Important),
            ("Product Demo - InnovateCorp", 8, (14, 0), (15, 0), Category::Important),
            ("Lead Follow-up Calls", 8, (16, 0), (16, 30), Category::Work),
            ("Team Building Event", 12, (19, 0), (21, 0), Category::Fun),
            ("Quarterly Sales Review", 14, (9, 0), (10, 0), Category::Important),
            ("Client Onboarding - MegaCorp", 15, (10, 0), (10, 30), Category::Work),
            ("Networking Event - TechConf", 15, (18, 0), (20, 0), Category::Fun),
            ("Proposal Presentation - DataFlow", 17, (14, 0), (15, 0), Category::Important),
            ("Sales Training Day", 18, (0, 0), (23, 59), Category::Work),
            ("Client Dinner - RetailPlus", 20, (19, 0), (22, 0), Category::Fun),
            ("Board Meeting - Q1 Results", 22, (9, 0), (11, 0), Category::Important),
            ("Cold Outreach Session", 22, (15, 0), (17, 0), Category::Work),
            ("Partner Meeting - ChannelCorp", 26, (14, 0), (16, 0), Category::Important),
            ("Customer Success Check-in", 26, (19, 0), (22, 0), Category::Work),
            ("Support Escalation Call", 29, (15, 0), (16, 0), Category::Work),
            ("Awards Ceremony - Sales Team", 29, (20, 0), (23, 0), Category::Fun),
            ("Sales Skills Workshop", 31, (9, 0), (12, 0), Category::Work),
        ];

        entries
            .into_iter()
            .map(|(title, day, (sh, sm), (eh, em), category)| {
                Event::new(title, at(day, sh, sm), at(day, eh, em), category)
            })
            .collect()
    }
}

/// Events declared in the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigEvents {
    events: Vec<Event>,
}

impl ConfigEvents {
    pub const fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl EventSource for ConfigEvents {
    fn list(&self) -> Vec<Event> {
        self.events.clone()
    }
}
