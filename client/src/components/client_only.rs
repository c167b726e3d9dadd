//! Browser-only subtree gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `fallback` (default: nothing) during the server pass and during
//! hydration, so the hydrated markup always matches the server's. After the
//! first client mount the children replace the fallback, once.

use leptos::prelude::*;

use crate::state::mount::MountPhase;

#[component]
pub fn ClientOnly(
    children: ChildrenFn,
    #[prop(optional, into)] fallback: ViewFn,
) -> impl IntoView {
    let phase = RwSignal::new(MountPhase::initial());

    // Effects only run in the browser, after the subtree is mounted.
    Effect::new(move |_| {
        phase.update(|p| *p = p.complete());
    });

    view! {
        <Show when=move || phase.get().renders_children() fallback=fallback>
            {children()}
        </Show>
    }
}
