//! Company background, values, and service area.

use leptos::prelude::*;

use crate::components::seo::Seo;
use crate::pages::home::CallToAction;
use crate::util::seo::{ABOUT_META, BUSINESS};

const VALUES: [(&str, &str); 4] = [
    ("Integrity", "We do the right thing, even when no one's watching"),
    ("Excellence", "Good enough isn't in our vocabulary"),
    ("Community", "Phoenix is our home. We give back."),
    ("Reliability", "We show up. On time. Every time."),
];

const CERTIFICATIONS: [&str; 5] = [
    "NATE Certified Technicians",
    "EPA 608 Universal Certified",
    "BBB Accredited Business (A+ Rating)",
    "Arizona ROC Licensed",
    "Factory Authorized: Trane, Carrier, Lennox",
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Seo meta=ABOUT_META/>
        <section class="page-hero">
            <div class="container">
                <p class="eyebrow">"About Us"</p>
                <h1>{format!("Keeping Phoenix Cool Since {}", BUSINESS.founded)}</h1>
                <p>"Family-owned and operated, with technicians who treat your home like their own."</p>
            </div>
        </section>
        <section class="section">
            <div class="container">
                <h2>"Our Values"</h2>
                <ul class="card-grid">
                    {VALUES
                        .into_iter()
                        .map(|(title, body)| view! { <li class="card"><h3>{title}</h3><p>{body}</p></li> })
                        .collect_view()}
                </ul>
            </div>
        </section>
        <section class="section section--muted">
            <div class="container">
                <h2>"Certifications"</h2>
                <ul class="check-list">
                    {CERTIFICATIONS.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
                </ul>
                <h2>"Areas We Serve"</h2>
                <ul class="pill-list">
                    {BUSINESS.service_areas.iter().map(|city| view! { <li>{*city}</li> }).collect_view()}
                </ul>
            </div>
        </section>
        <CallToAction/>
    }
}
