// Shared test fixture for calendar events.

use chrono::NaiveDate;

use crate::modules::calendar::core::event::Event;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventBuilder {
    pub fn new() -> Self {
        Self {
            inner: Event {
                user_id: 1,
                event_id: 1,
                title: "Standup".to_string(),
                description: None,
                date: ymd(2020, 1, 1),
            },
        }
    }

    pub fn user_id(mut self, v: i64) -> Self {
        self.inner.user_id = v;
        self
    }

    pub fn event_id(mut self, v: i64) -> Self {
        self.inner.event_id = v;
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}
