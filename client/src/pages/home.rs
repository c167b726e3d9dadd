//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::seo::Seo;
use crate::util::seo::{BUSINESS, HOME_META, catalog_services, service_description};

const REASONS: [(&str, &str); 4] = [
    ("Same-Day Service", "Most repairs are completed the day you call."),
    ("Licensed & Insured", "NATE certified technicians and an Arizona ROC license."),
    ("Upfront Pricing", "Free estimates and no surprise charges."),
    ("24/7 Emergency Line", "A real person answers, day or night."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Seo meta=HOME_META/>
        <section class="hero">
            <div class="container">
                <h1>"Phoenix's Trusted Heating & Cooling Experts"</h1>
                <p class="hero__lead">
                    "Fast, honest HVAC service for Valley homes and businesses. When it's 115° outside, we get you cool again."
                </p>
                <div class="hero__actions">
                    <A href="/contact" attr:class="button button--accent">"Get a Free Estimate"</A>
                    <a class="button button--outline" href=BUSINESS.tel_href()>
                        {format!("Call {}", BUSINESS.phone_display)}
                    </a>
                </div>
            </div>
        </section>
        <section class="section">
            <div class="container">
                <h2>"Our Services"</h2>
                <ul class="card-grid">
                    {catalog_services()
                        .map(|service| {
                            view! {
                                <li class="card">
                                    <h3>{service.label()}</h3>
                                    <p>{service_description(service)}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <A href="/services" attr:class="button button--outline">"View All Services"</A>
            </div>
        </section>
        <section class="section section--muted">
            <div class="container">
                <h2>{format!("Why Choose {}", BUSINESS.name)}</h2>
                <ul class="card-grid">
                    {REASONS
                        .into_iter()
                        .map(|(title, body)| view! { <li class="card"><h3>{title}</h3><p>{body}</p></li> })
                        .collect_view()}
                </ul>
            </div>
        </section>
        <CallToAction/>
    }
}

/// Closing banner shared by the content pages.
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container">
                <h2>"Ready to Beat the Heat?"</h2>
                <p>"Schedule service today or call now for 24/7 emergency help."</p>
                <div class="hero__actions">
                    <A href="/contact" attr:class="button button--accent">"Schedule Service"</A>
                    <a class="button button--outline" href=BUSINESS.tel_href()>{BUSINESS.phone_display}</a>
                </div>
            </div>
        </section>
    }
}
