//! Form field components

pub mod field_wrapper;
pub mod select;
pub mod text_area;
pub mod text_input;

pub use field_wrapper::FieldWrapper;
pub use select::SelectField;
pub use text_area::TextAreaField;
pub use text_input::TextInputField;
