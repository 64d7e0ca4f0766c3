use std::marker::PhantomData;
use std::sync::Arc;

use sea_orm::{DbConn, DbErr, EntityTrait, PrimaryKeyTrait, SqlErr};

use quill_core::error::RepoError;

/// Generic PostgreSQL repository over one SeaORM entity with an integer key.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub(crate) fn conn(&self) -> &DbConn {
        &self.db
    }

    /// Fetch the raw row with this id.
    pub(crate) async fn find_model(&self, id: i32) -> Result<Option<E::Model>, RepoError> {
        E::find_by_id(id).one(self.conn()).await.map_err(map_db_err)
    }

    /// Delete the row with this id, reporting whether anything was removed.
    pub(crate) async fn delete_model(&self, id: i32) -> Result<bool, RepoError> {
        let result = E::delete_by_id(id)
            .exec(self.conn())
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

/// Classify a driver error.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

/// `Ok(None)` for an UPDATE that matched no row. A no-op update re-reads the
/// row instead and reports a missing one as `RecordNotFound`.
pub(crate) fn none_if_not_updated<T>(result: Result<T, DbErr>) -> Result<Option<T>, RepoError> {
    match result {
        Ok(model) => Ok(Some(model)),
        Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => Ok(None),
        Err(e) => Err(map_db_err(e)),
    }
}
