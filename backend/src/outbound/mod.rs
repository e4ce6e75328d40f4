//! Outbound adapters for external dependencies.

pub mod cache;
pub mod visual_crossing;
