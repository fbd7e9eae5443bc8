use std::fmt::Display;

use scraper::ElementRef;

use crate::parse::{element_text, text_from_selection};
use crate::static_selector;

/// One dish row of a canteen table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    kind: Option<String>,
    title: String,
    details: Option<String>,
}

impl MenuItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            kind: None,
            title: title.into(),
            details: None,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Reads one `<tr>` of a menu table. Header rows and rows without any
    /// text are structural and yield `None`.
    pub fn from_html_element(row: ElementRef<'_>) -> Option<Self> {
        static_selector!(HEADER_CELL_SELECTOR <- "th");
        static_selector!(KIND_SELECTOR <- "td.sp_typ");
        static_selector!(DESCRIPTION_SELECTOR <- "td.sp_bez");
        static_selector!(TITLE_SELECTOR <- "strong");
        static_selector!(CELL_SELECTOR <- "td");

        if row.select(&HEADER_CELL_SELECTOR).next().is_some() {
            return None;
        }

        let Some(description) = row.select(&DESCRIPTION_SELECTOR).next() else {
            // unknown layout, keep whatever the cells say
            let text = row
                .select(&CELL_SELECTOR)
                .map(element_text)
                .filter(|cell| !cell.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            return (!text.is_empty()).then(|| Self::new(text));
        };

        let full = element_text(description);
        if full.is_empty() {
            return None;
        }
        let title = text_from_selection(&TITLE_SELECTOR, description).unwrap_or_else(|| full.clone());
        let details = match full.strip_prefix(title.as_str()) {
            Some(rest) => rest.trim().to_string(),
            None => full.clone(),
        };
        let details = (!details.is_empty() && details != title).then_some(details);

        Some(Self {
            kind: text_from_selection(&KIND_SELECTOR, row),
            title,
            details,
        })
    }
}

impl Display for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(kind) = self.kind() {
            write!(f, "**{kind}**: ")?;
        }
        write!(f, "{}", self.title())?;
        if let Some(details) = self.details() {
            write!(f, " · {details}")?;
        }
        Ok(())
    }
}
