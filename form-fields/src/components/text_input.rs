//! Text Input Component

use leptos::prelude::*;

use crate::utils::classes::control_class;
use crate::utils::constants::{INPUT_CLASS, INPUT_ERROR_CLASS};

/// Styled `<input>`.
///
/// Spread attributes (`{..}`, `attr:`, `on:`, `prop:`) land on the `<input>`
/// unchanged, so the caller owns `type`, `value`, handlers and the rest.
///
/// ```rust,ignore
/// view! {
///     <TextInputField error=name_invalid class="wide"
///         {..}
///         type="text"
///         placeholder="Name"
///         prop:value=name
///         on:input=move |ev| set_name.set(event_target_value(&ev))
///     />
/// }
/// ```
#[component]
pub fn TextInputField(
    /// Applies the error style.
    #[prop(optional, into)]
    error: MaybeProp<bool>,
    /// Extra class appended after the base and error classes.
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    log::trace!("TextInputField render");

    let classes = move || {
        control_class(
            INPUT_CLASS,
            INPUT_ERROR_CLASS,
            error.get().unwrap_or(false),
            class.get().as_deref(),
        )
    };

    view! { <input class=classes/> }
}
