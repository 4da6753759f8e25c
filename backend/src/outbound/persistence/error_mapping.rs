//! Classification of pool, Diesel and row-decoding failures shared by the
//! repositories. Each port error type converts from [`StoreFailure`], so
//! adapters can use `?` after a `map_err` into it.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{KudoPersistenceError, UserPersistenceError};

use super::models::RowDecodeError;
use super::pool::PoolError;

/// Storage failure reduced to what the ports distinguish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreFailure {
    /// The database could not be reached.
    Connection(String),
    /// The statement ran and failed, or returned unusable data.
    Query(String),
}

impl StoreFailure {
    pub(crate) fn from_pool(error: PoolError) -> Self {
        Self::Connection(error.message().to_owned())
    }

    /// Classify a Diesel error raised by `operation`.
    ///
    /// Driver detail goes to the debug log only.
    pub(crate) fn from_diesel(error: DieselError, operation: &'static str) -> Self {
        match &error {
            DieselError::DatabaseError(kind, info) => {
                debug!(?kind, message = info.message(), operation, "diesel operation failed");
            }
            other => debug!(error = %other, operation, "diesel operation failed"),
        }

        match error {
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
            | DieselError::BrokenTransactionManager => {
                Self::Connection(format!("{operation}: database connection error"))
            }
            DieselError::NotFound => Self::Query(format!("{operation}: record not found")),
            _ => Self::Query(format!("{operation}: database error")),
        }
    }
}

impl From<RowDecodeError> for StoreFailure {
    fn from(error: RowDecodeError) -> Self {
        Self::Query(error.to_string())
    }
}

impl From<StoreFailure> for UserPersistenceError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            StoreFailure::Connection(message) => Self::connection(message),
            StoreFailure::Query(message) => Self::query(message),
        }
    }
}

impl From<StoreFailure> for KudoPersistenceError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            StoreFailure::Connection(message) => Self::connection(message),
            StoreFailure::Query(message) => Self::query(message),
        }
    }
}
