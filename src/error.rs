use crate::parse;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    /// looks like `YYYY-MM-DD` but names no calendar day
    InvalidDate(String),
    /// neither `today`, `tomorrow` nor `YYYY-MM-DD`
    UnrecognizedToken(String),
    Request(reqwest::Error),
    HttpStatus {
        status: u16,
        body: String,
    },
    Parse(parse::Error),
    CanteenNotFound {
        query: String,
        available: Vec<String>,
    },
    AmbiguousCanteen {
        query: String,
        candidates: Vec<String>,
    },
    NoDefaultCanteen,
    Config(String),
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e)
    }
}

impl Error {
    /// Network failures and non-200 answers.
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Error::Request(_) | Error::HttpStatus { .. })
    }

    /// The chat message sent back instead of a menu.
    pub fn reply(&self) -> String {
        match self {
            Error::InvalidDate(date) => {
                format!("Could not parse date `{date}`. Use `today`, `tomorrow`, or `YYYY-MM-DD`.")
            }
            Error::UnrecognizedToken(token) => {
                format!("`{token}` is not a date. Use `today`, `tomorrow`, or `YYYY-MM-DD`.")
            }
            Error::Request(e) if e.is_timeout() => {
                "Menu fetch failed: the request timed out.".to_string()
            }
            Error::Request(_) => "Menu fetch failed: could not reach the menu server.".to_string(),
            Error::HttpStatus { status, .. } => format!("Menu fetch failed: HTTP {status}."),
            Error::Parse(_) => "Menu unavailable for that date.".to_string(),
            Error::CanteenNotFound { query, available } => {
                let mut reply = format!("Canteen `{query}` not found.");
                if !available.is_empty() {
                    reply.push_str(" Available:");
                    push_bullets(&mut reply, available);
                }
                reply
            }
            Error::AmbiguousCanteen { query, candidates } => {
                let mut reply = format!("Canteen name `{query}` is ambiguous. Matches:");
                push_bullets(&mut reply, candidates);
                reply
            }
            Error::NoDefaultCanteen => {
                "No default canteen configured. Please set `default_canteen` in the instance config."
                    .to_string()
            }
            Error::Config(_) => "The lunch command is misconfigured.".to_string(),
        }
    }
}

fn push_bullets(out: &mut String, names: &[String]) {
    for name in names {
        out.push_str("\n- ");
        out.push_str(name);
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate(s) => write!(f, "Invalid date: {s}"),
            Error::UnrecognizedToken(s) => write!(f, "Unrecognized date token: {s}"),
            Error::Request(e) => write!(f, "Request error: {e}"),
            Error::HttpStatus { status, body } => write!(f, "HTTP {status}: {body}"),
            Error::Parse(e) => write!(f, "Parse error: {e}"),
            Error::CanteenNotFound { query, .. } => write!(f, "Canteen not found: {query}"),
            Error::AmbiguousCanteen { query, candidates } => write!(
                f,
                "Ambiguous canteen {query}: {}",
                candidates.join(", ")
            ),
            Error::NoDefaultCanteen => write!(f, "No default canteen configured"),
            Error::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_reply_lists_candidates() {
        let e = Error::AmbiguousCanteen {
            query: "mensa".to_string(),
            candidates: vec!["Zentralmensa".to_string(), "Mensa am Turm".to_string()],
        };
        assert_eq!(
            e.reply(),
            "Canteen name `mensa` is ambiguous. Matches:\n- Zentralmensa\n- Mensa am Turm"
        );
    }

    #[test]
    fn test_not_found_reply_names_query() {
        let e = Error::CanteenNotFound {
            query: "xyz".to_string(),
            available: vec![],
        };
        assert_eq!(e.reply(), "Canteen `xyz` not found.");
    }

    #[test]
    fn test_fetch_errors() {
        let e = Error::HttpStatus {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert!(e.is_fetch_error());
        assert_eq!(e.reply(), "Menu fetch failed: HTTP 404.");
        assert!(!Error::from(parse::Error::NoMenuTables).is_fetch_error());
    }
}
