use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::PullError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullDate(NaiveDate);

impl PullDate {
    pub fn today() -> Self {
        PullDate(Local::now().date_naive())
    }

    /// Parse a six-digit `MMDDYY` string. Two-digit years follow the POSIX
    /// pivot (`00`–`68` → 2000s).
    pub fn parse(mmddyy: &str) -> Result<Self, PullError> {
        let s = mmddyy.trim();
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PullError::InvalidDate(mmddyy.to_string()));
        }
        NaiveDate::parse_from_str(s, "%m%d%y")
            .map(PullDate)
            .map_err(|_| PullError::InvalidDate(mmddyy.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn yyyymmdd(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    pub fn mmddyy(&self) -> String {
        self.0.format("%m%d%y").to_string()
    }

    /// `YYYY0000`, used when a block has no parseable effective date.
    pub fn year_fallback(&self) -> String {
        format!("{:04}0000", self.0.year())
    }

    pub fn label(&self) -> String {
        format!("Pull date: {}", long_date(self.0))
    }
}

impl fmt::Display for PullDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.mmddyy())
    }
}

/// "January 5, 2024" (no zero padding on the day).
pub fn long_date(d: NaiveDate) -> String {
    format!("{} {}, {}", d.format("%B"), d.day(), d.year())
}
