use leptos::prelude::*;

use crate::components::Layout;

/// Competition landing page.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Layout>
            <h1>"Compete in a Uniswap trading competition"</h1>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_single_heading() {
        let html = view! { <Home /> }.to_html();

        assert_eq!(html.matches("<h1").count(), 1, "{html}");
        assert!(html.contains("<main><h1>Compete in a Uniswap trading competition</h1></main>"), "{html}");
    }

    #[test]
    fn carries_layout_title() {
        let html = view! { <Home /> }.to_html();

        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains("<title>Uniswap trading competition</title>"), "{html}");
    }
}
