//! Inbound adapters mapping transports onto domain ports.

pub mod http;
