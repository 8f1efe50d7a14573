use leptos::prelude::*;

/// Shared document shell: head metadata followed by a single `<main>` region
/// that receives the page content.
#[component]
pub fn Layout(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html>
            <head>
                <meta charset="utf-8" />
                <title>"Uniswap trading competition"</title>
                <meta name="viewport" content="width=device-width,initial-scale=1" />
            </head>
            <body>
                <main>{children.map(|children| children())}</main>
            </body>
        </html>
    }
}
