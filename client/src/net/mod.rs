//! Browser-to-server networking.

pub mod api;
