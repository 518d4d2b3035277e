//! Generic repository base shared by the domain crates.
//!
//! Wraps a SeaORM [`DatabaseConnection`] and exposes the find/insert/update/
//! delete primitives plus a transaction-begin helper. Domain repositories
//! compose this rather than talking to the connection directly, so pooling
//! and transaction handling stay in one place.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IntoActiveModel, PrimaryKeyTrait, TransactionTrait,
};
use std::marker::PhantomData;

/// Base repository for a single SeaORM entity.
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Access the underlying connection for entity-specific queries.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Begin a transaction on the underlying connection.
    ///
    /// The transaction rolls back on drop unless committed.
    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.db.begin().await
    }

    /// Find a row by primary key. Absence is a non-error result.
    pub async fn find_by_id<V>(&self, id: V) -> Result<Option<E::Model>, DbErr>
    where
        V: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType> + Send,
    {
        E::find_by_id(id).one(&self.db).await
    }

    /// Insert a new row and return the stored model.
    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    /// Delete a row by primary key, returning the number of rows removed.
    pub async fn delete_by_id<V>(&self, id: V) -> Result<u64, DbErr>
    where
        V: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType> + Send,
    {
        E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map(|res| res.rows_affected)
    }
}
