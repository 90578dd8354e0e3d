pub mod api;
pub mod confirm;
pub mod date_utils;
pub mod dom;
pub mod host_page;
pub mod logging;
pub mod safe_submit;
