pub mod balances;
pub mod category_browser;
pub mod day_view;
pub mod forms;
pub mod header;
pub mod movements;
pub mod side_menu;
pub mod skip_day_toggle;
pub mod summary;
