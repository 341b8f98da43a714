//! Styled form field components for Leptos
//!
//! Four presentational components that put consistent classes around native
//! form controls:
//!
//! - [`FieldWrapper`] - label, wrapped control and optional error message
//! - [`TextInputField`] - `<input>`
//! - [`TextAreaField`] - `<textarea>`
//! - [`SelectField`] - `<select>`
//!
//! The input components forward every spread attribute to the native control
//! and add the error class when `error` is set. With the `csr` feature the
//! crate also boots a component gallery in the browser.

pub mod app;
pub mod components;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use components::{FieldWrapper, SelectField, TextAreaField, TextInputField};

pub mod prelude {
    pub use crate::components::{FieldWrapper, SelectField, TextAreaField, TextInputField};
    pub use crate::utils::classes::join_classes;
}

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::FormGallery;

    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Form field gallery starting...");

    leptos::mount::mount_to_body(|| view! { <FormGallery/> });
}
