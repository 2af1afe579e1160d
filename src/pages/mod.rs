//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped state and delegate rendering of shared controls to
//! `components`.

pub mod account;
pub mod feed;
pub mod section;
