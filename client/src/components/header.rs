//! Site header: brand, primary navigation, and click-to-call.
//!
//! The router's `<A>` marks the current page with `aria-current="page"`,
//! which the stylesheet uses for the active link.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::util::seo::BUSINESS;

/// Primary navigation, in display order.
pub const NAV_LINKS: [(&str, &str); 4] =
    [("Home", "/"), ("Services", "/services"), ("About", "/about"), ("Contact", "/contact")];

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let menu_open = RwSignal::new(false);

    // Close the mobile menu after every navigation.
    Effect::new(move |_| {
        location.pathname.track();
        menu_open.set(false);
    });

    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <A href="/" attr:class="brand">
                    <span class="brand__name">{BUSINESS.name}</span>
                    <span class="brand__tagline">{BUSINESS.tagline}</span>
                </A>
                <button
                    class="site-header__menu"
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "Menu"
                </button>
                <nav class="site-nav" class:site-nav--open=move || menu_open.get()>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(name, path)| {
                            view! {
                                <A href=path attr:class="site-nav__link">
                                    {name}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
                <a class="site-header__call button button--accent" href=BUSINESS.tel_href()>
                    {BUSINESS.phone_display}
                </a>
            </div>
        </header>
    }
}
