use crate::error::ConflictTarget;

/// Unique constraint on `url_mappings.short_code`.
pub const SHORT_CODE_CONSTRAINT: &str = "url_mappings_short_code_key";

/// Unique constraint on `url_mappings.original_url`.
pub const ORIGINAL_URL_CONSTRAINT: &str = "url_mappings_original_url_key";

/// Maps a unique violation on one of the `url_mappings` constraints to its target.
pub fn conflict_target(e: &sqlx::Error) -> Option<ConflictTarget> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    match db_err.constraint() {
        Some(SHORT_CODE_CONSTRAINT) => Some(ConflictTarget::ShortCode),
        Some(ORIGINAL_URL_CONSTRAINT) => Some(ConflictTarget::OriginalUrl),
        _ => None,
    }
}
