//! Diesel schema for project persistence.

diesel::table! {
    /// Projects started from templates.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Originating template.
        template_id -> Uuid,
        /// First day of the schedule.
        start_date -> Date,
        /// Creator.
        #[max_length = 255]
        created_by -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Tasks materialised for a project, one per template step.
    project_tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
        /// Step position.
        position -> Int4,
        /// What the task is.
        description -> Text,
        /// Responsible department.
        #[max_length = 255]
        department -> Varchar,
        /// How the task is carried out.
        method -> Text,
        /// Planned due date.
        due_date -> Date,
        /// Completion timestamp.
        completed_at -> Nullable<Timestamptz>,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Latest lifecycle timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(project_tasks -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, project_tasks);
