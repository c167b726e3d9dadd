//! Client-side state containers.
//!
//! DESIGN
//! ======
//! Plain data types with pure transition methods. Components wrap them in
//! `RwSignal`s created inside the root component, so every render pass gets
//! its own instances.

pub mod lead_form;
pub mod mount;
pub mod toast;
