use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Month, NaiveDate};
use regex::{Captures, Regex};
use tracing::{debug, warn};

use super::index::PositionIndex;
use crate::error::PullError;
use crate::pull_date::{long_date, PullDate};

static DATES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)DATE.?><HED>DATES.*\n?<P>(.*)").unwrap());
static LONG_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w*) (\d{1,2}), (\d{4})").unwrap());
static PAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*<PRTPAGE P='(\d+)'>\s*").unwrap());
static VOL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<VOL>(\d*)").unwrap());

pub const NO_PAGE: &str = "00000";

/// An effective date as announced in a DATES section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateEntry {
    pub date: Option<NaiveDate>,
    pub label: String,
}

impl DateEntry {
    /// Stands in before the first DATES section: the pull date as a label,
    /// no effective date.
    pub fn pull(pull: PullDate) -> Self {
        DateEntry {
            date: None,
            label: pull.label(),
        }
    }

    fn from_marker(caps: &Captures<'_>) -> Self {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let raw = caps.get(1).map_or("", |m| m.as_str());
        let found: Vec<Captures<'_>> = LONG_DATE_RE.captures_iter(whole).collect();

        let entry = match found.as_slice() {
            [only] => match parse_long_date(only) {
                Some(date) => DateEntry {
                    date: Some(date),
                    label: long_date(date),
                },
                None => DateEntry {
                    date: None,
                    label: raw.to_string(),
                },
            },
            [first, ..] => DateEntry {
                date: parse_long_date(first),
                label: raw.to_string(),
            },
            [] => DateEntry {
                date: None,
                label: raw.to_string(),
            },
        };
        if entry.date.is_none() {
            warn!(label = %entry.label, "DATES marker without a usable date");
        }
        entry
    }
}

/// `Month day, year`, with the month spelled out in full.
fn parse_long_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let month = Month::from_str(&caps[1]).ok()?;
    let day = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
}

pub fn date_index(text: &str, pull: PullDate) -> PositionIndex<DateEntry> {
    let index = PositionIndex::build(text, &DATES_RE, DateEntry::pull(pull), DateEntry::from_marker);
    debug!(entries = index.len(), "date index built");
    index
}

pub fn page_index(text: &str) -> PositionIndex<String> {
    let index = PositionIndex::build(text, &PAGE_RE, NO_PAGE.to_string(), |caps| {
        caps[1].to_string()
    });
    debug!(entries = index.len(), "page index built");
    index
}

/// Digits after the first `<VOL>`. The tag itself is required.
pub fn volume_number(text: &str) -> Result<String, PullError> {
    let caps = VOL_RE.captures(text).ok_or(PullError::MissingVolume)?;
    let volume = caps[1].to_string();
    if volume.is_empty() {
        warn!("<VOL> marker has no digits");
    }
    Ok(volume)
}
