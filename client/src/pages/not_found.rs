//! Fallback for unknown client-side routes.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found | Desert Cool Air"/>
        <section class="section">
            <div class="container">
                <h1>"Page not found"</h1>
                <p>"The page you're looking for doesn't exist or has moved."</p>
                <A href="/" attr:class="button button--accent">"Back to Home"</A>
            </div>
        </section>
    }
}
