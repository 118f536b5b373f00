use chrono::{DateTime, Local, SecondsFormat, Utc};

use crate::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateTimeFormat {
    /// Local wall-clock time, minute precision.
    #[default]
    Locale,
    /// UTC instant as RFC 3339 with milliseconds and a `Z` suffix.
    Iso,
}

/// A displayable story. Only built from an item that passed
/// [`is_displayable_story`](crate::is_displayable_story), see
/// `TryFrom<RawItem>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub(crate) id: ItemId,
    pub(crate) title: String,
    pub(crate) url: String,
    pub(crate) author: String,
    pub(crate) created_at: i64,
}

impl Story {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Unix timestamp in seconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Submission time rendered for display. Timestamps outside chrono's
    /// range fall back to the raw seconds value.
    pub fn created_at_date(&self, format: DateTimeFormat) -> String {
        let Some(utc) = DateTime::<Utc>::from_timestamp(self.created_at, 0) else {
            return self.created_at.to_string();
        };
        match format {
            DateTimeFormat::Iso => utc.to_rfc3339_opts(SecondsFormat::Millis, true),
            DateTimeFormat::Locale => utc
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        }
    }
}
