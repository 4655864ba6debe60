//! String encoding of versioned schema documents.

use super::{SchemaError, SchemaResult, VersionedSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Encodes and decodes versioned schema values.
pub trait VersionedSchemaSerDes {
    /// Encodes `schema` together with its version tag.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Encode`] if the encoder fails.
    fn serialize<S: VersionedSchema>(&self, schema: &S) -> SchemaResult<String>;

    /// Decodes a document into the current shape `S`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Decode`] for malformed documents,
    /// [`SchemaError::UnsupportedVersion`] when the document's tag is not
    /// `S::SCHEMA_VERSION`, and the error from
    /// [`VersionedSchema::check_consistency`] when the decoded fields
    /// disagree.
    fn deserialize<S: VersionedSchema>(&self, data: &str) -> SchemaResult<S>;
}

/// JSON implementation of [`VersionedSchemaSerDes`].
///
/// Documents are JSON objects holding the shape's fields plus a
/// `schemaVersion` number.
///
/// # Examples
///
/// ```
/// use servicebay::maintenance::schema::{
///     JsonSerializer, TaskEnvelope, VersionedSchemaSerDes,
/// };
/// use servicebay::maintenance::domain::{TaskStatus, TaskType};
///
/// let envelope = TaskEnvelope {
///     task_id: None,
///     vin: "1HGCM82633A004352".to_owned(),
///     task_type: TaskType::OilChange,
///     status: TaskStatus::InProgress,
///     notes: None,
///     details: None,
/// };
/// let serializer = JsonSerializer::new();
/// let text = serializer.serialize(&envelope).expect("encodes");
/// assert!(text.contains("\"schemaVersion\":1"));
/// let decoded: TaskEnvelope = serializer.deserialize(&text).expect("decodes");
/// assert_eq!(decoded, envelope);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

#[derive(Serialize)]
struct VersionedDocumentRef<'a, S> {
    #[serde(rename = "schemaVersion")]
    schema_version: u32,
    #[serde(flatten)]
    body: &'a S,
}

#[derive(Deserialize)]
struct VersionedDocument {
    #[serde(rename = "schemaVersion")]
    schema_version: u32,
    #[serde(flatten)]
    body: Map<String, Value>,
}

#[derive(Deserialize)]
struct VersionHeader {
    #[serde(rename = "schemaVersion")]
    schema_version: u32,
}

impl JsonSerializer {
    /// Creates a JSON serializer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl VersionedSchemaSerDes for JsonSerializer {
    fn serialize<S: VersionedSchema>(&self, schema: &S) -> SchemaResult<String> {
        let document = VersionedDocumentRef {
            schema_version: schema.schema_version(),
            body: schema,
        };
        serde_json::to_string(&document).map_err(SchemaError::Encode)
    }

    fn deserialize<S: VersionedSchema>(&self, data: &str) -> SchemaResult<S> {
        let document: VersionedDocument =
            serde_json::from_str(data).map_err(SchemaError::Decode)?;

        // Older tags would be upgraded here once a second shape exists.
        if document.schema_version != S::SCHEMA_VERSION {
            return Err(SchemaError::UnsupportedVersion {
                found: document.schema_version,
                current: S::SCHEMA_VERSION,
            });
        }

        let schema: S =
            serde_json::from_value(Value::Object(document.body)).map_err(SchemaError::Decode)?;
        schema.check_consistency()?;
        Ok(schema)
    }
}

/// Reads the version tag of a stored document without decoding its body.
///
/// # Errors
///
/// Returns [`SchemaError::Decode`] if the document is not a JSON object with
/// a numeric `schemaVersion`.
pub fn schema_version_of(data: &str) -> SchemaResult<u32> {
    serde_json::from_str::<VersionHeader>(data)
        .map(|header| header.schema_version)
        .map_err(SchemaError::Decode)
}
