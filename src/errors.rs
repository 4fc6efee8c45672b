use derive_more::{Display, Error};
use sqlx::error::ErrorKind;

#[derive(Debug, Display, Error)]
pub enum AppError {
    #[display(fmt = "invalid value '{}' for {}", value, key)]
    InvalidConfig {
        key: &'static str,
        value: String,
    },

    #[display(fmt = "failed to open store {}: {}", url, source)]
    StoreOpen {
        url: String,
        source: sqlx::Error,
    },

    #[display(fmt = "failed to create table {}: {}", table, source)]
    TableCreation {
        table: &'static str,
        source: sqlx::Error,
    },

    #[display(fmt = "constraint violation: {}", source)]
    Constraint {
        source: sqlx::Error,
    },

    #[display(fmt = "not found")]
    NotFound,

    #[display(fmt = "bad request")]
    BadClientData,

    #[display(fmt = "internal error: {}", source)]
    InternalError {
        source: sqlx::Error,
    },
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => AppError::Constraint { source: err },
                _ => AppError::InternalError { source: err },
            },
            _ => AppError::InternalError { source: err },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn other_errors_are_internal() {
        let err: AppError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, AppError::InternalError { .. }));
    }

    #[test]
    fn display_names_the_table() {
        let err = AppError::TableCreation {
            table: "rsvp",
            source: sqlx::Error::PoolClosed,
        };
        assert!(err.to_string().starts_with("failed to create table rsvp"));
    }
}
