//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome, the lead form, and head metadata while
//! reading/writing shared state from Leptos context providers.

pub mod client_only;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod seo;
pub mod toaster;
