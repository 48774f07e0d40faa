//! API endpoint handlers.
//!
//! Each module covers one resource on the HTTP surface.

pub mod analyses;
pub mod billing;
pub mod documents;
pub mod health;
pub mod webhook;
