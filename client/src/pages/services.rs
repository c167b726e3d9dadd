//! Service catalog page. Its `OfferCatalog` JSON-LD comes from the route table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::seo::Seo;
use crate::pages::home::CallToAction;
use crate::util::seo::{BUSINESS, SERVICES_META, catalog_services, service_description};

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Seo meta=SERVICES_META/>
        <section class="page-hero">
            <div class="container">
                <p class="eyebrow">"Our Services"</p>
                <h1>"Our HVAC Services"</h1>
                <p>"Comprehensive heating and cooling solutions for Phoenix homes and businesses"</p>
            </div>
        </section>
        <section class="section">
            <div class="container service-list">
                {catalog_services()
                    .map(|service| {
                        view! {
                            <article class="service" id=service.slug()>
                                <h2>{service.label()}</h2>
                                <p>{service_description(service)}</p>
                                {if service == leads::ServiceNeeded::Emergency {
                                    view! {
                                        <a class="button button--accent" href=BUSINESS.tel_href()>
                                            {format!("Call Now: {}", BUSINESS.phone_display)}
                                        </a>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <A href="/contact" attr:class="button button--accent">
                                            "Request Service"
                                        </A>
                                    }
                                        .into_any()
                                }}
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
        <CallToAction/>
    }
}
