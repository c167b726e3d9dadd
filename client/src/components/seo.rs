//! Per-page head tags and client-side structured data.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Seo` writes title, description, canonical, Open Graph, and Twitter tags
//! through `leptos_meta`, identically on server and client. JSON-LD is
//! different: the server shell emits it directly into `<head>`, and
//! `StructuredData` only claims those nodes in the browser, so hydration
//! never has to reconcile it.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::util::seo::PageMeta;

#[component]
pub fn Seo(meta: PageMeta) -> impl IntoView {
    let canonical = meta.canonical_url();
    let image = meta.image_url();

    view! {
        <Title text=meta.title/>
        <Meta name="description" content=meta.description/>
        {meta.keywords.map(|keywords| view! { <Meta name="keywords" content=keywords/> })}
        <Link rel="canonical" href=canonical.clone()/>
        <Meta property="og:title" content=meta.title/>
        <Meta property="og:description" content=meta.description/>
        <Meta property="og:url" content=canonical/>
        <Meta property="og:image" content=image.clone()/>
        <Meta property="og:type" content=meta.og_type/>
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=meta.title/>
        <Meta name="twitter:description" content=meta.description/>
        <Meta name="twitter:image" content=image/>
    }
}

/// Keeps the current route's JSON-LD blocks in `<head>` while mounted.
///
/// Renders nothing. In the browser it acquires one scoped node per block,
/// adopting the server-rendered ones, and releases them when the route
/// changes or the component unmounts.
#[component]
pub fn StructuredData() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::head::{BrowserHead, HeadNode, ScopedHeadNode};
        use crate::util::seo::structured_data_for_path;

        let location = leptos_router::hooks::use_location();
        Effect::new(move |_| {
            let path = location.pathname.get();
            let guards: Vec<ScopedHeadNode<BrowserHead>> = structured_data_for_path(&path)
                .into_iter()
                .map(|block| ScopedHeadNode::acquire(BrowserHead, &HeadNode::json_ld(block.id, block.json)))
                .collect();
            log::debug!("structured data claimed for {path}: {} block(s)", guards.len());
            on_cleanup(move || drop(guards));
        });
    }
}
