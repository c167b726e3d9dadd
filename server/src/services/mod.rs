//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business rules and outbound calls so route handlers
//! can stay focused on protocol translation.

pub mod lead;
