pub mod meal_period;
pub mod menu_book;
pub mod menu_entry;

pub use meal_period::*;
pub use menu_book::*;
pub use menu_entry::*;
