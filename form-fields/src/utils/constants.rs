//! Style classifiers applied by the field components
//!
//! The stylesheet shipped in `style/fields.css` defines one rule per constant.

// Field wrapper
pub const FIELD_CLASS: &str = "field";
pub const LABEL_CLASS: &str = "field-label";
pub const LABEL_REQUIRED_CLASS: &str = "field-label-required";
pub const ERROR_MESSAGE_CLASS: &str = "field-error";

// Native controls: (base, error)
pub const INPUT_CLASS: &str = "field-input";
pub const INPUT_ERROR_CLASS: &str = "field-input-error";

pub const TEXTAREA_CLASS: &str = "field-textarea";
pub const TEXTAREA_ERROR_CLASS: &str = "field-textarea-error";

pub const SELECT_CLASS: &str = "field-select";
pub const SELECT_ERROR_CLASS: &str = "field-select-error";
