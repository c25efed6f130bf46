use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// A festival performance. Events live in the catalog only and are never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub date: String,
    pub time: String,
    pub genre: String,
    pub description: String,
    pub stage: u32,
    pub price: f64,
    pub icon_path: String,
}

impl Event {
    /// Combines the display `date` and `time` into a timestamp, if both parse.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&format!("{} {}", self.date, self.time), DATE_TIME_FORMAT)
            .ok()
    }
}

/// Event as exposed to clients, with the parsed start time alongside the
/// display strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub starts_at: Option<NaiveDateTime>,
}

impl From<&Event> for EventView {
    fn from(event: &Event) -> Self {
        Self {
            starts_at: event.starts_at(),
            event: event.clone(),
        }
    }
}
