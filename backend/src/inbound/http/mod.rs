//! HTTP inbound adapter exposing the weather endpoint and health probes.

pub mod health;
pub mod state;
pub mod weather;
