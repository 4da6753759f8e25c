//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod fixture_data;
mod kudo_repository;
mod kudos_query;
mod profile_command;
mod user_repository;
mod users_query;

pub use fixture_data::{ADA_USER_ID, GRACE_USER_ID, JANET_USER_ID};
#[cfg(test)]
pub use kudo_repository::MockKudoRepository;
pub use kudo_repository::{KudoPersistenceError, KudoRepository};
#[cfg(test)]
pub use kudos_query::MockKudosQuery;
pub use kudos_query::{FixtureKudosQuery, KudosQuery, RECENT_KUDOS_LIMIT};
#[cfg(test)]
pub use profile_command::MockProfileCommand;
pub use profile_command::{FixtureProfileCommand, ProfileCommand};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::{FixtureUsersQuery, UsersQuery};
