//! Textarea Component

use leptos::prelude::*;

use crate::utils::classes::control_class;
use crate::utils::constants::{TEXTAREA_CLASS, TEXTAREA_ERROR_CLASS};

/// Styled `<textarea>`. Spread attributes are forwarded to the element.
#[component]
pub fn TextAreaField(
    /// Applies the error style.
    #[prop(optional, into)]
    error: MaybeProp<bool>,
    /// Extra class appended after the base and error classes.
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    log::trace!("TextAreaField render");

    let classes = move || {
        control_class(
            TEXTAREA_CLASS,
            TEXTAREA_ERROR_CLASS,
            error.get().unwrap_or(false),
            class.get().as_deref(),
        )
    };

    view! { <textarea class=classes></textarea> }
}
