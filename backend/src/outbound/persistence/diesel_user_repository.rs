//! PostgreSQL-backed [`UserRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::{Clock, DefaultClock};
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{ProfileChanges, User, UserId};

use super::error_mapping::StoreFailure;
use super::models::{ProfileUpdate, UserRow};
use super::pool::DbPool;
use super::schema::{first_name_bytewise, users};

/// Diesel adapter for the `users` table.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselUserRepository {
    /// Repository stamping `updated_at` with the system clock.
    pub fn new(pool: DbPool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }

    /// Repository stamping `updated_at` with `clock`.
    pub fn with_clock(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

fn decode_users(rows: Vec<UserRow>) -> Result<Vec<User>, StoreFailure> {
    rows.into_iter()
        .map(|row| User::try_from(row).map_err(StoreFailure::from))
        .collect()
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from_pool)?;
        let row = users::table
            .find(*id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| StoreFailure::from_diesel(err, "find user"))?;

        let user = row
            .map(User::try_from)
            .transpose()
            .map_err(StoreFailure::from)?;
        Ok(user)
    }

    async fn list_except(&self, id: &UserId) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from_pool)?;
        let rows = users::table
            .filter(users::id.ne(*id.as_uuid()))
            .order((first_name_bytewise().asc(), users::id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| StoreFailure::from_diesel(err, "list users"))?;

        Ok(decode_users(rows)?)
    }

    async fn update_profile(
        &self,
        id: &UserId,
        changes: &ProfileChanges,
    ) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(StoreFailure::from_pool)?;
        let updated = diesel::update(users::table.find(*id.as_uuid()))
            .set(&ProfileUpdate::new(changes, self.clock.utc()))
            .execute(&mut conn)
            .await
            .map_err(|err| StoreFailure::from_diesel(err, "update profile"))?;

        if updated == 0 {
            return Err(UserPersistenceError::not_found(id.as_ref()));
        }
        debug!(user_id = %id, "profile row updated");
        Ok(())
    }
}
