use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::banner::Banner;
use crate::calendar::{Category, Event};

#[derive(Debug, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub events: Vec<EventEntry>,
    #[serde(default)]
    pub calendar: Calendars,
    #[serde(default)]
    pub banners: Vec<Banner>,
}

/// One `[[events]]` entry of the configuration file.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct EventEntry {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: Category,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<EventEntry> for Event {
    fn from(entry: EventEntry) -> Self {
        let mut event = Self::new(entry.title, entry.start, entry.end, entry.category);
        event.location = entry.location;
        event.description = entry.description;

        event
    }
}

/// Per-surface category filters.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Calendars {
    pub month: Option<CategoryFilter>,
    pub day: Option<CategoryFilter>,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct CategoryFilter {
    #[serde(default)]
    pub exclude: Vec<Category>,
    #[serde(default)]
    pub include: Vec<Category>,
}

impl CategoryFilter {
    pub fn is_included(&self, category: Category) -> bool {
        if !self.include.is_empty() && self.include.contains(&category) {
            return true;
        }

        if !self.exclude.is_empty() && !self.exclude.contains(&category) {
            return true;
        }

        false
    }
}

pub fn init(path: PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
    let string = std::fs::read_to_string(path)?;
    let config = parse(&string)?;

    Ok(config)
}

pub fn parse(string: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(string)
}
