use crate::domain::errors::DomainError;

const IDX_PAGE_SLUG: &str = "pages.slug";
const UNIQUE_FAILED: &str = "UNIQUE constraint failed";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() || db_err.message().contains(UNIQUE_FAILED) {
                // SQLite reports the column, not the index name.
                return if db_err.message().contains(IDX_PAGE_SLUG) {
                    DomainError::Conflict("slug already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }

            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
