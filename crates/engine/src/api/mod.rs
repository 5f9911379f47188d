//! API layer - HTTP entry points.

pub mod extract;
pub mod http;
