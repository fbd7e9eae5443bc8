use chrono::NaiveDate;
use reqwest::Client;

use crate::{
    config::Config,
    date::{resolve_date, DateToken},
    error::{Error, Result},
    fetch::{fetch_menu_page, make_client},
    format::format_menu,
    parse::MenuDay,
    resolve::resolve_canteen,
};

pub const COMMAND: &str = "!lunch";
pub const USAGE: &str = "Usage: !lunch [date] [canteen...]";

/// The arguments of one `!lunch` invocation, with the date already checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub date: NaiveDate,
    /// `None` means the configured default canteen
    pub canteen_query: Option<String>,
}

impl ResolvedRequest {
    /// A leading `today`, `tomorrow` or `YYYY-MM-DD` is the date; every other
    /// token belongs to the canteen name.
    pub fn from_args(args: &str, today: NaiveDate) -> Result<Self> {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        let (date, rest) = match tokens.split_first() {
            Some((first, rest)) if DateToken::classify(first).is_some() => {
                (resolve_date(Some(*first), today)?, rest)
            }
            _ => (resolve_date(None, today)?, tokens.as_slice()),
        };
        let query = rest.join(" ");

        Ok(Self {
            date,
            canteen_query: (!query.is_empty()).then_some(query),
        })
    }
}

/// Arguments of `message` if it is a `!lunch` command.
pub fn command_args(message: &str) -> Option<&str> {
    let rest = message.trim_start().strip_prefix(COMMAND)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

/// Answers `!lunch` commands. Holds no per-request state, so one handler
/// can serve concurrent invocations.
#[derive(Debug, Clone)]
pub struct CommandHandler {
    config: Config,
    client: Client,
}

impl CommandHandler {
    pub fn new(config: Config) -> Result<Self> {
        let client = make_client(&config)?;
        Ok(Self { config, client })
    }

    /// Reply to a raw chat message, `None` when it is not addressed to us.
    pub async fn handle(&self, message: &str, today: NaiveDate) -> Option<String> {
        let args = command_args(message)?;
        Some(self.lunch(args, today).await)
    }

    /// Always produces a reply: the menu, or one error message.
    pub async fn lunch(&self, args: &str, today: NaiveDate) -> String {
        if args.trim().eq_ignore_ascii_case("help") {
            return USAGE.to_string();
        }
        match self.try_lunch(args, today).await {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_fetch_error() {
                    log::warn!("lunch `{args}` failed: {e}");
                } else {
                    log::info!("lunch `{args}` failed: {e}");
                }
                e.reply()
            }
        }
    }

    async fn try_lunch(&self, args: &str, today: NaiveDate) -> Result<String> {
        let request = ResolvedRequest::from_args(args, today)?;
        let query = request.canteen_query.as_deref().unwrap_or_default();
        // no point in fetching a page nobody asked a canteen of
        if query.is_empty() && self.config.default_canteen.trim().is_empty() {
            return Err(Error::NoDefaultCanteen);
        }

        let html = fetch_menu_page(&self.client, &self.config, request.date).await?;
        let day = MenuDay::from_html(&html, request.date, self.config.lang)?;
        if day.skipped_tables() > 0 {
            log::warn!(
                "{} menu table(s) without a canteen name on {} ({})",
                day.skipped_tables(),
                day.date(),
                day.lang()
            );
        }

        let canteen = resolve_canteen(query, &self.config.default_canteen, day.canteens())?;
        Ok(format_menu(canteen, day.date(), self.config.max_items))
    }
}
