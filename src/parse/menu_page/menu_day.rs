use chrono::NaiveDate;
use scraper::Html;

use super::canteen::Canteen;
use crate::config::Lang;
use crate::parse::{Error, Result};
use crate::static_selector;

/// Everything one cached `alle.html` page says about one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDay {
    date: NaiveDate,
    lang: Lang,
    canteens: Vec<Canteen>,
    // `sp_tab` tables that had no recognisable canteen name
    skipped_tables: usize,
}

impl MenuDay {
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn lang(&self) -> Lang {
        self.lang
    }

    pub fn canteens(&self) -> &[Canteen] {
        &self.canteens
    }

    pub const fn skipped_tables(&self) -> usize {
        self.skipped_tables
    }

    pub fn from_html(html: &str, date: NaiveDate, lang: Lang) -> Result<Self> {
        let document = Html::parse_document(html);
        Self::from_document(&document, date, lang)
    }

    pub fn from_document(document: &Html, date: NaiveDate, lang: Lang) -> Result<Self> {
        // class selectors match on the token set, so `class="sp_tab highlight"` counts too
        static_selector!(TABLE_SELECTOR <- "table.sp_tab");

        let mut canteens = vec![];
        let mut skipped_tables = 0;
        for table in document.select(&TABLE_SELECTOR) {
            match Canteen::from_html_element(table) {
                Some(canteen) => canteens.push(canteen),
                None => skipped_tables += 1,
            }
        }
        if canteens.is_empty() {
            return Err(Error::NoMenuTables);
        }

        Ok(Self {
            date,
            lang,
            canteens,
            skipped_tables,
        })
    }
}
