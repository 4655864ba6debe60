//! Diesel schema for maintenance task persistence.

diesel::table! {
    /// Maintenance task records holding serialized envelopes.
    maintenance_tasks (id) {
        /// Repository-assigned identifier drawn from `maintenance_tasks_id_seq`.
        id -> Int8,
        /// Serialized, version-tagged task envelope.
        aggregate -> Text,
        /// Schema version tag copied from the envelope.
        schema_version -> Int4,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
