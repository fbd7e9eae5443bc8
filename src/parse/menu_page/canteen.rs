use scraper::ElementRef;

use super::menu_item::MenuItem;
use crate::parse::{element_text, element_text_without, text_from_selection};
use crate::static_selector;

/// A dining hall and the dishes its table lists, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canteen {
    name: String,
    // the page's own rendering of the date, ex. "Montag, 02.02.2026"
    page_date: Option<String>,
    items: Vec<MenuItem>,
}

impl Canteen {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            page_date: None,
            items,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn page_date(&self) -> Option<&str> {
        self.page_date.as_deref()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Reads one `table.sp_tab`. Returns `None` when no canteen name can be
    /// found for the table.
    pub fn from_html_element(table: ElementRef<'_>) -> Option<Self> {
        static_selector!(ROW_SELECTOR <- "tr");
        static_selector!(DATE_SELECTOR <- ".sp_date");

        let name = Self::name_of(table)?;
        let page_date = text_from_selection(&DATE_SELECTOR, table);
        let items = table
            .select(&ROW_SELECTOR)
            .filter_map(MenuItem::from_html_element)
            .collect();

        Some(Self {
            name,
            page_date,
            items,
        })
    }

    // caption, then the header's <strong>, then the header cell minus its date,
    // then a heading right before the table
    fn name_of(table: ElementRef<'_>) -> Option<String> {
        static_selector!(CAPTION_SELECTOR <- "caption");
        static_selector!(HEADER_NAME_SELECTOR <- "th strong");
        static_selector!(HEADER_SELECTOR <- "th");

        text_from_selection(&CAPTION_SELECTOR, table)
            .or_else(|| text_from_selection(&HEADER_NAME_SELECTOR, table))
            .or_else(|| {
                table
                    .select(&HEADER_SELECTOR)
                    .next()
                    .map(|th| element_text_without(th, "sp_date"))
                    .filter(|text| !text.is_empty())
            })
            .or_else(|| {
                table
                    .prev_siblings()
                    .find_map(ElementRef::wrap)
                    .filter(|el| {
                        matches!(el.value().name(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
                    })
                    .map(element_text)
                    .filter(|text| !text.is_empty())
            })
    }
}
