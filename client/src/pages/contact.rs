//! Contact page hosting the lead form.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::seo::Seo;
use crate::util::seo::{BUSINESS, CONTACT_META};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Seo meta=CONTACT_META/>
        <section class="page-hero">
            <div class="container">
                <p class="eyebrow">"Contact Us"</p>
                <h1>"Let's Talk About Your HVAC Needs"</h1>
                <p>
                    "Get your free estimate or schedule service today. Our team is here to help with all your heating and cooling needs."
                </p>
            </div>
        </section>
        <section class="section">
            <div class="container contact-layout">
                <ContactForm/>
                <aside class="contact-details">
                    <h2>"Reach Us Directly"</h2>
                    <p><a href=BUSINESS.tel_href()>{BUSINESS.phone_display}</a></p>
                    <p><a href=BUSINESS.mailto_href()>{BUSINESS.email}</a></p>
                    <p>{format!("Serving {} and the surrounding Valley", BUSINESS.city)}</p>
                    <p>"Emergency service available 24/7"</p>
                </aside>
            </div>
        </section>
    }
}
