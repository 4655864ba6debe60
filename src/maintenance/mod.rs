//! Vehicle maintenance task tracking.
//!
//! Tasks of several types are created from untyped request data, persisted
//! as version-tagged envelopes and mutated through a small set of updates.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Per-type construction from untyped payloads in [`creators`]
//! - The versioned persistence shape in [`schema`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod creators;
pub mod domain;
pub mod ports;
pub mod schema;
pub mod services;
