//! Select Component

use leptos::prelude::*;

use crate::utils::classes::control_class;
use crate::utils::constants::{SELECT_CLASS, SELECT_ERROR_CLASS};

/// Styled `<select>` wrapping the given `<option>` children.
/// Spread attributes are forwarded to the element.
#[component]
pub fn SelectField(
    /// Applies the error style.
    #[prop(optional, into)]
    error: MaybeProp<bool>,
    /// Extra class appended after the base and error classes.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    log::trace!("SelectField render");

    let classes = move || {
        control_class(
            SELECT_CLASS,
            SELECT_ERROR_CLASS,
            error.get().unwrap_or(false),
            class.get().as_deref(),
        )
    };

    view! { <select class=classes>{children.map(|children| children())}</select> }
}
