/// Primary keys in the `users`, `olaylar` and `olay` tables are PostgreSQL `integer`.
pub type DbId = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
