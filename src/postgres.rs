//! Shared `PostgreSQL` plumbing for the Diesel adapters.
//!
//! Diesel is synchronous, so every adapter offloads its work to the blocking
//! thread pool through [`run_blocking`] instead of stalling async workers.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type shared by all adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Error types that can absorb an infrastructure failure.
pub(crate) trait StorageFailure: Sized {
    /// Wraps a pool, join, or driver error.
    fn from_storage(err: impl std::error::Error + Send + Sync + 'static) -> Self;
}

/// Runs `f` with a pooled connection on the blocking thread pool.
///
/// Pool checkout failures and join errors are converted through
/// [`StorageFailure`]; errors returned by `f` pass through unchanged.
pub(crate) async fn run_blocking<F, T, E>(pool: &PgPool, f: F) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: StorageFailure + Send + 'static,
{
    let owned_pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = owned_pool.get().map_err(E::from_storage)?;
        f(&mut connection)
    })
    .await
    .map_err(E::from_storage)?
}
