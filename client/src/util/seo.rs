//! Business identity, per-page metadata, and schema.org JSON-LD.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`BUSINESS`] constant feeds the header, footer, page meta tags, and
//! structured data. [`structured_data_for_path`] is the single table of
//! JSON-LD blocks per route: the server shell renders it into `<head>` and the
//! client `StructuredData` component claims the same nodes after mount.

use leads::ServiceNeeded;
use serde_json::{Value, json};

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

// =============================================================================
// BUSINESS PROFILE
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub struct BusinessProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub phone_display: &'static str,
    /// Digits dialed by `tel:` links.
    pub phone_dial: &'static str,
    pub email: &'static str,
    pub url: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub country: &'static str,
    pub founded: &'static str,
    pub image_path: &'static str,
    pub service_areas: &'static [&'static str],
}

pub const BUSINESS: BusinessProfile = BusinessProfile {
    name: "Desert Cool Air",
    tagline: "HVAC Experts",
    description: "Phoenix's trusted HVAC experts. 24/7 emergency AC repair, installation, and maintenance.",
    phone_display: "(602) 555-2665",
    phone_dial: "6025552665",
    email: "info@desertcoolair.com",
    url: "https://desertcoolair.com",
    city: "Phoenix",
    region: "AZ",
    country: "US",
    founded: "2010",
    image_path: "/images/hero-desert.jpg",
    service_areas: &[
        "Phoenix", "Scottsdale", "Mesa", "Tempe", "Chandler", "Gilbert", "Glendale", "Peoria", "Surprise",
        "Avondale", "Goodyear", "Buckeye",
    ],
};

impl BusinessProfile {
    #[must_use]
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }

    #[must_use]
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        canonical_url(self.url, path)
    }
}

// =============================================================================
// PAGE META
// =============================================================================

/// Literal head text for one page.
#[derive(Clone, Copy, Debug)]
pub struct PageMeta {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: Option<&'static str>,
    pub og_type: &'static str,
    pub image_path: Option<&'static str>,
}

impl PageMeta {
    #[must_use]
    pub fn canonical_url(&self) -> String {
        BUSINESS.absolute_url(self.path)
    }

    /// Absolute share image, falling back to the site-wide hero.
    #[must_use]
    pub fn image_url(&self) -> String {
        BUSINESS.absolute_url(self.image_path.unwrap_or(BUSINESS.image_path))
    }
}

pub const HOME_META: PageMeta = PageMeta {
    path: "/",
    title: "Phoenix HVAC Services | AC Repair & Installation | Desert Cool Air",
    description: "Phoenix's trusted HVAC experts. 24/7 emergency AC repair, installation, and maintenance. \
                  Same-day service. Free estimates. Call (602) 555-2665.",
    keywords: Some(
        "HVAC Phoenix, AC repair Phoenix, air conditioning Phoenix, heating cooling Arizona, Desert Cool Air",
    ),
    og_type: "website",
    image_path: None,
};

pub const SERVICES_META: PageMeta = PageMeta {
    path: "/services",
    title: "HVAC Services in Phoenix | AC Repair, Installation, Heating | Desert Cool Air",
    description: "Complete HVAC services for Phoenix homes and businesses. AC repair, installation, heating, \
                  maintenance, and indoor air quality. Licensed and insured.",
    keywords: Some("AC repair, AC installation, heating repair, HVAC maintenance, indoor air quality, Phoenix"),
    og_type: "website",
    image_path: Some("/images/hero-services-trucks.jpg"),
};

pub const ABOUT_META: PageMeta = PageMeta {
    path: "/about",
    title: "About Desert Cool Air | Phoenix HVAC Company Since 2010",
    description: "Family-owned Phoenix HVAC company serving the Valley since 2010. NATE certified technicians, \
                  BBB accredited, ROC licensed. Meet our team.",
    keywords: None,
    og_type: "website",
    image_path: None,
};

pub const CONTACT_META: PageMeta = PageMeta {
    path: "/contact",
    title: "Contact Desert Cool Air | Free HVAC Estimate Phoenix",
    description: "Get a free HVAC estimate from Desert Cool Air. Contact us for AC repair, installation, and \
                  maintenance in Phoenix. Call (602) 555-2665 or fill out our form.",
    keywords: None,
    og_type: "website",
    image_path: None,
};

/// Absolute URL for `path` under `base`. The root keeps its trailing slash;
/// every other path drops it.
#[must_use]
pub fn canonical_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = normalize_path(path);
    if path == "/" { format!("{base}/") } else { format!("{base}{path}") }
}

/// Strip query, fragment, and trailing slash. Empty input becomes `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

// =============================================================================
// SERVICE CATALOG
// =============================================================================

/// Marketing copy for a catalog entry.
#[must_use]
pub fn service_description(service: ServiceNeeded) -> &'static str {
    match service {
        ServiceNeeded::AcRepair => {
            "Certified technicians diagnose and repair all brands and models, most the same day you call."
        }
        ServiceNeeded::AcInstallation => {
            "Right-sized, energy-efficient systems from all major brands, with free in-home estimates."
        }
        ServiceNeeded::Maintenance => {
            "Maintenance plans that keep your system efficient and catch small problems before they grow."
        }
        ServiceNeeded::Heating => "Furnace, heat pump, and dual-fuel service to keep you comfortable year-round.",
        ServiceNeeded::Emergency => "Around-the-clock emergency response for when your AC fails in the heat.",
        ServiceNeeded::AirQuality => "Purifiers, UV lights, humidity control, and duct cleaning for cleaner air.",
        ServiceNeeded::Other => "Not sure what you need? Tell us and we'll take a look.",
    }
}

/// Services advertised on the site; `Other` is a form option only.
pub fn catalog_services() -> impl Iterator<Item = ServiceNeeded> {
    ServiceNeeded::ALL.into_iter().filter(|s| *s != ServiceNeeded::Other)
}

// =============================================================================
// JSON-LD
// =============================================================================

pub const BUSINESS_JSON_LD_ID: &str = "ld-business";
pub const SERVICES_JSON_LD_ID: &str = "ld-services";

/// One `<script type="application/ld+json">` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonLdBlock {
    pub id: &'static str,
    /// Script-safe serialized JSON.
    pub json: String,
}

#[must_use]
pub fn local_business_json_ld(profile: &BusinessProfile) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "HVACBusiness",
        "name": profile.name,
        "description": profile.description,
        "url": profile.absolute_url("/"),
        "telephone": profile.phone_display,
        "email": profile.email,
        "image": profile.absolute_url(profile.image_path),
        "foundingDate": profile.founded,
        "priceRange": "$$",
        "address": {
            "@type": "PostalAddress",
            "addressLocality": profile.city,
            "addressRegion": profile.region,
            "addressCountry": profile.country,
        },
        "areaServed": profile
            .service_areas
            .iter()
            .map(|city| json!({ "@type": "City", "name": city }))
            .collect::<Vec<_>>(),
        "openingHoursSpecification": {
            "@type": "OpeningHoursSpecification",
            "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
            "opens": "00:00",
            "closes": "23:59",
        },
    })
}

#[must_use]
pub fn service_catalog_json_ld(profile: &BusinessProfile) -> Value {
    let offers: Vec<Value> = catalog_services()
        .map(|service| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": service.label(),
                    "description": service_description(service),
                    "areaServed": profile.city,
                },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "OfferCatalog",
        "name": format!("{} HVAC Services", profile.name),
        "url": profile.absolute_url("/services"),
        "itemListElement": offers,
    })
}

/// Serialize JSON for embedding in a `<script>` element.
///
/// `<`, `>` and `&` become `\u003c`, `\u003e` and `\u0026`, which keeps
/// `</script>` and HTML comments out of the output while staying valid JSON.
#[must_use]
pub fn script_safe_json(value: &Value) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            other => out.push(other),
        }
    }
    out
}

/// JSON-LD blocks for a route. Every page carries the business block; the
/// services page adds its catalog.
#[must_use]
pub fn structured_data_for_path(path: &str) -> Vec<JsonLdBlock> {
    let mut blocks = vec![JsonLdBlock {
        id: BUSINESS_JSON_LD_ID,
        json: script_safe_json(&local_business_json_ld(&BUSINESS)),
    }];
    if normalize_path(path) == SERVICES_META.path {
        blocks.push(JsonLdBlock {
            id: SERVICES_JSON_LD_ID,
            json: script_safe_json(&service_catalog_json_ld(&BUSINESS)),
        });
    }
    blocks
}
