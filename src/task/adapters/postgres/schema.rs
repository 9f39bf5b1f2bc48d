//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Task title.
        #[max_length = 128]
        title -> Varchar,
        /// Optional task description.
        #[max_length = 256]
        description -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp, unset until the first update.
        updated_at -> Nullable<Timestamptz>,
    }
}
