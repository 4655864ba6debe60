//! Adapter implementations for maintenance task ports.

pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
