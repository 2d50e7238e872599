//! Generic record store over sea-orm entities.
//!
//! One `RecordStore` type serves every entity kind: it is parameterized by
//! the entity's active model and by the connection it runs on, so the same
//! code works against the connection pool or inside an open transaction.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, PrimaryKeyTrait, QueryFilter, sea_query::IntoCondition,
};

/// Entity kind stored through active model `A`.
pub type EntityOf<A> = <A as ActiveModelTrait>::Entity;

/// Read model returned by the store for active model `A`.
pub type ModelOf<A> = <EntityOf<A> as EntityTrait>::Model;

/// Primary-key value type of the entity behind `A`.
pub type IdOf<A> = <<EntityOf<A> as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Find/save/update/delete/count for one entity kind against an explicit
/// connection handle.
pub struct RecordStore<'c, A, C> {
    conn: &'c C,
    _record: PhantomData<fn() -> A>,
}

impl<'c, A, C> RecordStore<'c, A, C>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send + Sync + 'static,
    ModelOf<A>: IntoActiveModel<A> + Send + Sync,
    C: ConnectionTrait,
{
    pub fn new(conn: &'c C) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    /// Insert a new record and return it as stored (with its assigned key).
    pub async fn save(&self, record: A) -> Result<ModelOf<A>, DbErr> {
        record.insert(self.conn).await
    }

    /// Merge every field of `model` into the stored record with the same
    /// primary key.
    ///
    /// Fails with [`DbErr::RecordNotUpdated`] when no such record exists.
    pub async fn update(&self, model: ModelOf<A>) -> Result<ModelOf<A>, DbErr> {
        let record: A = model.into_active_model();
        record.reset_all().update(self.conn).await
    }

    /// Remove the record keyed by `model`'s primary key. Returns `true` if a
    /// row was deleted.
    pub async fn delete(&self, model: ModelOf<A>) -> Result<bool, DbErr> {
        let record: A = model.into_active_model();
        let result = record.delete(self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn find_by_id<K>(&self, id: K) -> Result<Option<ModelOf<A>>, DbErr>
    where
        K: Into<IdOf<A>>,
    {
        EntityOf::<A>::find_by_id(id).one(self.conn).await
    }

    /// Every record of this kind. Order is unspecified.
    pub async fn find_all(&self) -> Result<Vec<ModelOf<A>>, DbErr> {
        EntityOf::<A>::find().all(self.conn).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        EntityOf::<A>::find().count(self.conn).await
    }

    pub async fn find_where<F>(&self, filter: F) -> Result<Vec<ModelOf<A>>, DbErr>
    where
        F: IntoCondition,
    {
        EntityOf::<A>::find().filter(filter).all(self.conn).await
    }

    pub async fn find_one_where<F>(&self, filter: F) -> Result<Option<ModelOf<A>>, DbErr>
    where
        F: IntoCondition,
    {
        EntityOf::<A>::find().filter(filter).one(self.conn).await
    }

    pub async fn count_where<F>(&self, filter: F) -> Result<u64, DbErr>
    where
        F: IntoCondition,
    {
        EntityOf::<A>::find().filter(filter).count(self.conn).await
    }

    /// Delete every record matching `filter`. Returns the number of rows removed.
    pub async fn delete_where<F>(&self, filter: F) -> Result<u64, DbErr>
    where
        F: IntoCondition,
    {
        let result = EntityOf::<A>::delete_many()
            .filter(filter)
            .exec(self.conn)
            .await?;
        Ok(result.rows_affected)
    }
}
