//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep route and matching rules out of component bodies so
//! they can be unit tested without a router.

pub mod nav;
