//! Helpers shared by the component tests

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render a view to an HTML string inside a fresh reactive owner
pub fn render_html<V, F>(build: F) -> String
where
    V: IntoView + 'static,
    F: FnOnce() -> V,
{
    let owner = Owner::new();
    owner.with(|| build().into_view().to_html())
}
