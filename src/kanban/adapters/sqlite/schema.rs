//! Diesel schema for kanban persistence.

diesel::table! {
    /// Board records.
    boards (id) {
        /// Store-assigned board identifier.
        id -> Integer,
        /// Board display name.
        name -> Text,
    }
}

diesel::table! {
    /// Task records; `board_id` is null for backlog tasks.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Integer,
        /// Task title.
        title -> Text,
        /// Priority ordinal (1 low, 2 normal, 3 high).
        priority -> Integer,
        /// Free-text tag, empty when unset.
        tag -> Text,
        /// Workflow status ordinal (1 to do through 4 completed).
        status -> Integer,
        /// Optional calendar due date.
        due_date -> Nullable<Date>,
        /// Owning board, cascading on board deletion.
        board_id -> Nullable<Integer>,
    }
}

diesel::joinable!(tasks -> boards (board_id));
diesel::allow_tables_to_appear_in_same_query!(boards, tasks);
