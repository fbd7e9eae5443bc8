mod collapse_whitespace;
mod element_text;
mod error;
mod menu_page;
pub(crate) mod static_selector;

pub use collapse_whitespace::collapse_whitespace;
pub use element_text::{element_text, element_text_without, text_from_selection};
pub use error::{Error, Result};
pub use menu_page::{Canteen, MenuDay, MenuItem};
