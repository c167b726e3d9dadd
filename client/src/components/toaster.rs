//! Toast stack and the helper that feeds it.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// Queue a toast and schedule its auto-dismiss.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, title: &str, description: &str) {
    let id = toasts.try_update(|t| t.push(kind, title, description));

    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_DISMISS_MS, move || {
            toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Renders queued toasts. Mount inside `ClientOnly`.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <li class=toast.kind.css_class() role="status">
                            <div class="toast__body">
                                <p class="toast__title">{toast.title}</p>
                                {(!toast.description.is_empty())
                                    .then(|| view! { <p class="toast__description">{toast.description}</p> })}
                            </div>
                            <button
                                class="toast__close"
                                type="button"
                                aria-label="Dismiss notification"
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
