//! PostgreSQL persistence adapters built on Diesel, `diesel-async` and a
//! `bb8` pool.
//!
//! Row structs and table definitions stay private to this module; the
//! repositories translate them into domain types and map every failure into
//! the matching port error.
//!
//! ```no_run
//! use kudos::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), kudos::outbound::persistence::PoolError> {
//! let pool = DbPool::connect(PoolConfig::new("postgres://localhost/kudos")).await?;
//! let users = DieselUserRepository::new(pool);
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

mod diesel_kudo_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_kudo_repository::DieselKudoRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};
