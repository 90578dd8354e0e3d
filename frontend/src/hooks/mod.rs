pub mod use_day_loader;
pub mod use_safe_submit;

pub use use_day_loader::{use_day_loader, DayRequest};
pub use use_safe_submit::{use_safe_submit, BusyState};
