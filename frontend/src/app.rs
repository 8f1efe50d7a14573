use leptos::prelude::*;

use crate::pages::Home;

#[component]
pub fn App() -> impl IntoView {
    view! { <Home /> }
}

/// Renders the whole landing document, doctype included.
pub fn render_document() -> String {
    view! { <App /> }.to_html()
}
