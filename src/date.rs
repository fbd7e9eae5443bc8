use std::sync::OnceLock;

use chrono::{Days, Local, NaiveDate};
use regex::Regex;

use crate::error::{Error, Result};

/// A command token that names a day.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DateToken<'a> {
    Today,
    Tomorrow,
    /// matches `YYYY-MM-DD`, not yet checked against the calendar
    Iso(&'a str),
}

impl<'a> DateToken<'a> {
    pub fn classify(token: &'a str) -> Option<Self> {
        static ISO_RE: OnceLock<Regex> = OnceLock::new();
        let iso = ISO_RE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("regex should be valid"));

        if token.eq_ignore_ascii_case("today") {
            Some(Self::Today)
        } else if token.eq_ignore_ascii_case("tomorrow") {
            Some(Self::Tomorrow)
        } else if iso.is_match(token) {
            Some(Self::Iso(token))
        } else {
            None
        }
    }

    pub fn resolve(self, today: NaiveDate) -> Result<NaiveDate> {
        match self {
            Self::Today => Ok(today),
            Self::Tomorrow => today
                .checked_add_days(Days::new(1))
                .ok_or_else(|| Error::InvalidDate(format!("{today} + 1 day"))),
            Self::Iso(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| Error::InvalidDate(s.to_string())),
        }
    }
}

/// `None` means today.
pub fn resolve_date(token: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match token {
        None => Ok(today),
        Some(token) => DateToken::classify(token)
            .ok_or_else(|| Error::UnrecognizedToken(token.to_string()))?
            .resolve(today),
    }
}

/// Current date in the host's local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
