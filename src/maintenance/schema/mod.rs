//! Versioned persistence schema for maintenance tasks.
//!
//! The aggregate is never serialized directly. Repositories project it into
//! a [`TaskEnvelope`], whose shape carries a schema version, and encode that
//! envelope with a [`VersionedSchemaSerDes`]. Decoding checks the version
//! tag before reading the body, so a future migration has a single place to
//! branch on older shapes.

mod envelope;
mod error;
mod mapper;
mod serializer;

pub use envelope::{TaskDetailsDocument, TaskEnvelope, VersionedSchema};
pub use error::{SchemaError, SchemaResult};
pub use mapper::{to_aggregate, to_envelope};
pub use serializer::{JsonSerializer, VersionedSchemaSerDes, schema_version_of};
