/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// User id that requests act as when the caller does not name one.
pub const DEFAULT_CURRENT_USER_ID: DbId = 1;
