use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

/// Display category of an event.
///
/// Canonical set for every surface; the per-view ad-hoc tags of older
/// variants collapse into these four.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Important,
    Work,
    Fun,
    Personal,
}

/// Colour pair used to render an event of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Important, Self::Work, Self::Fun, Self::Personal];

    /// Total mapping from category to its colour pair.
    pub const fn style(self) -> CategoryStyle {
        match self {
            Self::Important => CategoryStyle {
                background: "#fecaca",
                foreground: "#7f1d1d",
            },
            Self::Work => CategoryStyle {
                background: "#fed7aa",
                foreground: "#7c2d12",
            },
            Self::Fun => CategoryStyle {
                background: "#bfdbfe",
                foreground: "#1e3a8a",
            },
            Self::Personal => CategoryStyle {
                background: "#e5e7eb",
                foreground: "#374151",
            },
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Important => "important",
            Self::Work => "work",
            Self::Fun => "fun",
            Self::Personal => "personal",
        }
    }
}

/// A scheduled item with a start/end instant and a display category.
///
/// Supplied wholesale by an [`super::EventSource`]; the grid and matcher
/// only ever read it. `end >= start` is the supplier's contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub uid: Uuid,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: Category,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        category: Category,
    ) -> Self {
        let title = title.into();

        Self {
            uid: derive_uid(&title, start),
            title,
            start,
            end,
            category,
            location: None,
            description: None,
        }
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub const fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Whether the event starts on the given calendar day. Time of day and
    /// any spill-over past midnight are ignored.
    pub fn is_on_day(&self, day: NaiveDate) -> bool {
        self.start.date() == day
    }
}

/// Events whose start falls on `day`, in supply order.
///
/// Always yields a (possibly empty) sequence; never mutates `events`.
pub fn events_on_day(events: &[Event], day: NaiveDate) -> impl Iterator<Item = &Event> {
    events.iter().filter(move |event| event.is_on_day(day))
}

fn derive_uid(title: &str, start: NaiveDateTime) -> Uuid {
    let key = format!("{start}/{title}");

    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())
}
