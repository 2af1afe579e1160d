//! Client-side derived state.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules hold the pure logic behind reactive signals so it can be
//! tested without a browser or a reactive owner.

pub mod auth;
