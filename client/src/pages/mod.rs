//! Route-level page components.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod services;
