mod canteen;
mod menu_day;
mod menu_item;

pub use canteen::Canteen;
pub use menu_day::MenuDay;
pub use menu_item::MenuItem;
