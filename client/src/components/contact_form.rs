//! Lead-capture form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates inline with the shared lead rules, posts once to the relay, and
//! reports the outcome through the toast queue. The submitting phase disables
//! the button and swallows re-entrant submits until the call settles.

use leads::{PreferredContact, ServiceNeeded};
use leptos::prelude::*;

use crate::state::lead_form::{CONSENT_FIELD, LeadField, LeadFormState};
use crate::state::toast::ToastState;
use crate::util::seo::BUSINESS;

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(LeadFormState::default());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let submitting = move || form.with(LeadFormState::is_submitting);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = form.try_update(LeadFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_lead(&submission).await;
            if let Err(e) = &result {
                log::warn!("lead submission failed: {e}");
            }
            if let Some(notice) = form.try_update(|f| f.finish_submit(&result)) {
                crate::components::toaster::show_toast(toasts, notice.kind, notice.title, notice.description);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (submission, toasts);
    };

    let consent_error = move || form.with(|f| f.error(CONSENT_FIELD));

    view! {
        <form class="lead-form" novalidate=true on:submit=on_submit>
            <div class="lead-form__row">
                <TextInput form=form field=LeadField::FirstName label="First Name" required=true autocomplete="given-name"/>
                <TextInput form=form field=LeadField::LastName label="Last Name" required=true autocomplete="family-name"/>
            </div>
            <div class="lead-form__row">
                <TextInput
                    form=form
                    field=LeadField::Email
                    label="Email"
                    input_type="email"
                    required=true
                    autocomplete="email"
                    placeholder="you@example.com"
                />
                <TextInput
                    form=form
                    field=LeadField::Phone
                    label="Phone"
                    input_type="tel"
                    required=true
                    autocomplete="tel"
                    placeholder="(602) 555-1234"
                />
            </div>
            <TextInput
                form=form
                field=LeadField::Address
                label="Service Address"
                autocomplete="street-address"
                placeholder="Street, City, ZIP"
            />
            <div class="lead-form__row">
                <SelectInput
                    form=form
                    field=LeadField::ServiceNeeded
                    label="Service Needed"
                    prompt="Select a service"
                    options=ServiceNeeded::ALL.iter().map(|s| (s.slug(), s.label())).collect()
                />
                <SelectInput
                    form=form
                    field=LeadField::PreferredContact
                    label="Preferred Contact Method"
                    prompt="Select a method"
                    options=PreferredContact::ALL.iter().map(|c| (c.slug(), c.label())).collect()
                />
            </div>
            <div class="form-field">
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="4"
                    placeholder="Tell us about your heating or cooling issue"
                    prop:value=move || form.with(|f| f.fields.message.clone())
                    on:input=move |ev| form.update(|f| f.edit(LeadField::Message, event_target_value(&ev)))
                    disabled=submitting
                ></textarea>
                <FieldError form=form field="message"/>
            </div>
            <div class="form-field form-field--consent">
                <label class="consent">
                    <input
                        type="checkbox"
                        name="tcpaConsent"
                        prop:checked=move || form.with(|f| f.fields.tcpa_consent)
                        on:change=move |ev| form.update(|f| f.set_consent(event_target_checked(&ev)))
                        disabled=submitting
                        aria-invalid=move || consent_error().is_some().to_string()
                    />
                    <span>
                        {format!(
                            "By checking this box, I agree to receive calls and text messages from {} at the \
                             number provided, including messages sent by automated technology. Consent is not \
                             a condition of purchase. Message and data rates may apply. Reply STOP to opt out.",
                            BUSINESS.name,
                        )}
                    </span>
                </label>
                <FieldError form=form field=CONSENT_FIELD/>
            </div>
            <button class="button button--accent" type="submit" disabled=submitting>
                {move || if submitting() { "Sending..." } else { "Get My Free Estimate" }}
            </button>
            <p class="lead-form__call">
                "Prefer to talk? Call us at "
                <a href=BUSINESS.tel_href()>{BUSINESS.phone_display}</a>
            </p>
        </form>
    }
}

/// Labeled text input bound to one lead field. Unset `placeholder` and
/// `autocomplete` are left off the element.
#[component]
fn TextInput(
    form: RwSignal<LeadFormState>,
    field: LeadField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = field.wire_name();
    let invalid = move || form.with(|f| f.error(id).is_some()).to_string();

    view! {
        <div class="form-field">
            <label for=id>{label} {required.then_some(" *")}</label>
            <input
                id=id
                name=id
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || form.with(|f| f.fields.text(field).to_owned())
                on:input=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
                disabled=move || form.with(LeadFormState::is_submitting)
                aria-invalid=invalid
            />
            <FieldError form=form field=id/>
        </div>
    }
}

#[component]
fn SelectInput(
    form: RwSignal<LeadFormState>,
    field: LeadField,
    label: &'static str,
    prompt: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let id = field.wire_name();

    view! {
        <div class="form-field">
            <label for=id>{label} " *"</label>
            <select
                id=id
                name=id
                prop:value=move || form.with(|f| f.fields.text(field).to_owned())
                on:change=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
                disabled=move || form.with(LeadFormState::is_submitting)
            >
                <option value="">{prompt}</option>
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
            <FieldError form=form field=id/>
        </div>
    }
}

#[component]
fn FieldError(form: RwSignal<LeadFormState>, field: &'static str) -> impl IntoView {
    move || {
        form.with(|f| f.error(field))
            .map(|message| view! { <p class="form-field__error" role="alert">{message}</p> })
    }
}

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;
