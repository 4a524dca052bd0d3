/// Current UTC time, used for `created_at` / `assigned_at` stamps.
pub fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}

/// Generate a fresh uuid-v4 string for use as a resource ID.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
