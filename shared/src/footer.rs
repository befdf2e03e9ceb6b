use chrono::{Datelike, Local, NaiveDate};

pub const APP_TITLE: &str = "Leptos Accordions";
pub const REPOSITORY_URL: &str = "https://github.com/brysonbw/lit-accordions";

/// Text shown in the page footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterContent {
    pub app_title: String,
    pub year: String,
}

impl FooterContent {
    /// Footer content for the current moment, read from the local clock
    pub fn now() -> Self {
        Self {
            app_title: APP_TITLE.to_string(),
            year: current_year(),
        }
    }
}

/// Current calendar year as a four-digit string
pub fn current_year() -> String {
    year_of(Local::now().date_naive())
}

pub fn year_of(date: NaiveDate) -> String {
    format!("{:04}", date.year())
}
