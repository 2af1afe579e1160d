//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and controls. They read shared services from
//! Leptos context and keep their decision logic in `state`/`util` helpers.

pub mod chip_selector;
pub mod navigation_bar;
