//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    client_only::ClientOnly, footer::Footer, header::Header, seo::StructuredData, toaster::Toaster,
};
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, not_found::NotFoundPage, services::ServicesPage,
};
use crate::state::toast::ToastState;
use crate::util::seo::structured_data_for_path;

/// HTML shell rendered on the server for SSR + hydration.
///
/// JSON-LD for the requested route is written straight into `<head>` here,
/// outside the hydrated tree.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let structured_data = structured_data_for_path(&request_path());

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                {structured_data
                    .into_iter()
                    .map(|block| {
                        view! { <script type="application/ld+json" id=block.id inner_html=block.json></script> }
                    })
                    .collect_view()}
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(feature = "ssr")]
fn request_path() -> String {
    use_context::<http::request::Parts>().map_or_else(|| "/".to_owned(), |parts| parts.uri.path().to_owned())
}

#[cfg(not(feature = "ssr"))]
fn request_path() -> String {
    "/".to_owned()
}

/// Root application component.
///
/// Provides the toast queue and sets up client-side routing around the
/// shared header and footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/desert-cool-air.css"/>

        <Router>
            <StructuredData/>
            <Header/>
            <main class="site-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
            <ClientOnly>
                <Toaster/>
            </ClientOnly>
        </Router>
    }
}
