//! Networking modules for the auth session boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls, `auth_service` wraps them behind the
//! `AuthService` seam together with the auth-change channel, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod auth_service;
pub mod types;
