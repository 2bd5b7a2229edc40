//! Diesel schema for template persistence.

diesel::table! {
    /// Template headers.
    templates (id) {
        /// Template identifier.
        id -> Uuid,
        /// Template name.
        #[max_length = 255]
        name -> Varchar,
        /// Creator.
        #[max_length = 255]
        created_by -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Ordered steps belonging to a template.
    template_steps (template_id, position) {
        /// Owning template.
        template_id -> Uuid,
        /// 1-based position.
        position -> Int4,
        /// What the step does.
        description -> Text,
        /// Responsible department.
        #[max_length = 255]
        department -> Varchar,
        /// How the step is carried out.
        method -> Text,
        /// Duration in days.
        duration_days -> Int4,
    }
}

diesel::joinable!(template_steps -> templates (template_id));
diesel::allow_tables_to_appear_in_same_query!(templates, template_steps);
