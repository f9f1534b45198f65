use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Parse a raw path segment into a [`DbId`].
///
/// Accepts an optional leading sign like any base-10 integer. Surrounding
/// whitespace and non-digit characters are rejected.
pub fn parse_db_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>().map_err(|_| CoreError::InvalidId {
        entity,
        raw: raw.to_string(),
    })
}
