//! Diesel schema for activity log persistence.

diesel::table! {
    /// Append-only activity entries.
    activity_log (id) {
        /// Entry identifier.
        id -> Uuid,
        /// Insertion order; newest entries have the highest value.
        sequence -> Int8,
        /// Event tag.
        #[max_length = 32]
        kind -> Varchar,
        /// Serialised event payload.
        payload -> Jsonb,
        /// Actor who caused the event.
        #[max_length = 255]
        actor -> Varchar,
        /// Recording timestamp.
        recorded_at -> Timestamptz,
    }
}
