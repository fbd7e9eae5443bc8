use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use tracing::{instrument, Level};
use url::Url;

use crate::config::{Config, Lang};
use crate::error::{Error, Result};

// how much of an error body ends up in the log
const BODY_SNIPPET_LEN: usize = 200;

pub fn make_client(config: &Config) -> Result<Client> {
    Client::builder()
        .gzip(true)
        .timeout(config.timeout())
        .build()
        .map_err(Error::from)
}

/// `{base}/{lang}/{YYYY-MM-DD}/alle.html`
pub fn menu_url(base: &Url, lang: Lang, date: NaiveDate) -> Result<Url> {
    let path = format!("{lang}/{}/alle.html", date.format("%Y-%m-%d"));
    base.join(&path)
        .map_err(|e| Error::Config(format!("cannot build menu url from {base}: {e}")))
}

/// One GET for the cached page of `date`, no retries.
#[instrument(skip(client, config, date), fields(
    lang = %config.lang,
    date = %date.format("%Y-%m-%d"),
), level = Level::TRACE)]
pub async fn fetch_menu_page(client: &Client, config: &Config, date: NaiveDate) -> Result<String> {
    let url = menu_url(&config.base_url, config.lang, date)?;
    let start = std::time::Instant::now();
    let response = client.get(url).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        let body: String = body.chars().take(BODY_SNIPPET_LEN).collect();
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }
    let text = response.text().await?;
    log::trace!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(text)
}
