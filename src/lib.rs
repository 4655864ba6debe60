//! Servicebay: vehicle maintenance task tracking.
//!
//! This crate records maintenance work against vehicles identified by VIN.
//! Oil changes, brake inspections, tire services and diagnostic scans are
//! built from loosely typed request data, stored as schema-versioned
//! envelopes and exposed through an async service.
//!
//! # Architecture
//!
//! Servicebay follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`maintenance`]: Task model, creation, persistence and services
//! - [`config`]: Environment-driven runtime settings

pub mod config;
pub mod maintenance;
