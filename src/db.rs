//! Database engine wiring and the unit-of-work provider.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{Database, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

/// Shared application state handed to the router.
#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
}

impl AppState {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    tracing::debug!("database engine connected");
    Ok(db)
}

/// Scoped unit of work: one transaction per call, the sole transaction
/// boundary in the system.
///
/// Commits when `work` returns `Ok`; rolls back and propagates the error
/// unchanged when it returns `Err`. The transaction is released on every
/// exit path. Sessions are never shared across concurrent units of work —
/// each call acquires its own.
pub async fn with_session<T, E, F>(db: &DatabaseConnection, work: F) -> Result<T, E>
where
    E: From<DbErr>,
    F: for<'c> FnOnce(
        &'c DatabaseTransaction,
    ) -> Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>,
{
    let txn = db.begin().await.map_err(E::from)?;
    match work(&txn).await {
        Ok(value) => {
            txn.commit().await.map_err(E::from)?;
            Ok(value)
        }
        Err(err) => {
            // Re-raise the original error even if the rollback itself fails.
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("rollback failed: {}", rollback_err);
            }
            Err(err)
        }
    }
}
