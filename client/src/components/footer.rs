//! Site footer with contact details and service links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::header::NAV_LINKS;
use crate::util::seo::{BUSINESS, catalog_services};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container site-footer__grid">
                <section>
                    <p class="brand__name">{BUSINESS.name}</p>
                    <p>{BUSINESS.description}</p>
                </section>
                <section>
                    <h2 class="site-footer__heading">"Quick Links"</h2>
                    <ul>
                        {NAV_LINKS
                            .into_iter()
                            .map(|(name, path)| view! { <li><A href=path>{name}</A></li> })
                            .collect_view()}
                    </ul>
                </section>
                <section>
                    <h2 class="site-footer__heading">"Services"</h2>
                    <ul>
                        {catalog_services()
                            .map(|service| view! { <li><A href="/services">{service.label()}</A></li> })
                            .collect_view()}
                    </ul>
                </section>
                <section>
                    <h2 class="site-footer__heading">"Contact"</h2>
                    <ul>
                        <li><a href=BUSINESS.tel_href()>{BUSINESS.phone_display}</a></li>
                        <li><a href=BUSINESS.mailto_href()>{BUSINESS.email}</a></li>
                        <li>{format!("{}, {}", BUSINESS.city, BUSINESS.region)}</li>
                        <li>"Open 24/7 for emergencies"</li>
                    </ul>
                </section>
            </div>
            <p class="site-footer__legal">
                {format!("© {}. Serving the Valley since {}.", BUSINESS.name, BUSINESS.founded)}
            </p>
        </footer>
    }
}
