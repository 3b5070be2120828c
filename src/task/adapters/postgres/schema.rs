//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records attached to external reference entities.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// External reference entity identifier.
        reference_id -> Int8,
        /// External reference entity classification.
        reference_type -> Text,
        /// Kind of work.
        task_type -> Text,
        /// Current assignee.
        assignee_id -> Int8,
        /// Task lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Optional urgency marker.
        #[max_length = 50]
        priority -> Nullable<Varchar>,
        /// Optional deadline.
        deadline -> Nullable<Timestamptz>,
        /// Free-text annotation.
        description -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
        /// Optimistic concurrency version.
        version -> Int8,
        /// Insertion sequence used for stable list ordering.
        seq -> Int8,
    }
}

diesel::table! {
    /// Append-only comments on tasks.
    task_comments (id) {
        /// Comment identifier.
        id -> Uuid,
        /// Task the comment belongs to.
        task_id -> Uuid,
        /// Comment author.
        author -> Text,
        /// Comment text.
        body -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(task_comments -> tasks (task_id));
diesel::allow_tables_to_appear_in_same_query!(tasks, task_comments);
