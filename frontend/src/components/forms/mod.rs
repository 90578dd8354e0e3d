pub mod category_picker;
pub mod csrf_field;
pub mod money_input;
pub mod movement_form;
pub mod submit_button;

pub use category_picker::CategoryPicker;
pub use csrf_field::CsrfField;
pub use money_input::MoneyInput;
pub use movement_form::MovementForm;
pub use submit_button::SubmitButton;
