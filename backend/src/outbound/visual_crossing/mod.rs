//! Visual Crossing weather provider adapter.

mod dto;
mod http_source;

pub use http_source::VisualCrossingSource;
