//! Query managers
//!
//! A [`Manager`] builds and runs queries for one entity. Every operation
//! goes through [`Manager::scope`], which turns caller criteria into the
//! condition actually sent to the database. [`CurdManager`] uses the
//! criteria as given; [`SoftDelManager`](crate::SoftDelManager) adds its
//! deleted-flag default on top.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, ConnectionTrait, EntityTrait,
    IdenStatic, IntoActiveModel, Iterable, Order, PaginatorTrait, PrimaryKeyToColumn,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::marker::PhantomData;

use crate::database::criteria::Criteria;
use crate::error::ModelError;

/// Model type returned by a manager's queries
pub type ModelOf<M> = <<M as Manager>::Entity as EntityTrait>::Model;

/// Active model type a manager inserts and updates
pub type ActiveModelOf<M> = <<M as Manager>::Entity as EntityTrait>::ActiveModel;

/// Rows fetched by `get` to tell "one" from "several"
const MAX_GET_RESULTS: u64 = 2;

/// Query shortcuts over one entity
///
/// Only the scoping hooks and the two removal operations differ between
/// managers; everything else is provided on top of them.
#[async_trait]
pub trait Manager: Send + Sync {
    /// Entity this manager queries
    type Entity: EntityTrait;

    /// Condition sent to the database for a read with these criteria,
    /// `None` when every row matches
    fn scope(&self, criteria: Criteria) -> Option<Condition>;

    /// Condition matching the rows `exclude` drops, `None` to drop nothing
    fn exclusion(&self, criteria: Criteria) -> Option<Condition>;

    /// Adjust a row that `get_or_create` or `update_or_create` is about to insert
    fn prepare_insert(&self, _criteria: &Criteria, _active: &mut ActiveModelOf<Self>) {}

    /// Remove every row matching the criteria, returning how many were affected
    async fn remove_where<C>(&self, db: &C, criteria: Criteria) -> Result<u64, ModelError>
    where
        C: ConnectionTrait;

    /// Remove a single loaded row
    async fn remove<C>(&self, db: &C, model: ModelOf<Self>) -> Result<(), ModelError>
    where
        C: ConnectionTrait,
        ModelOf<Self>: IntoActiveModel<ActiveModelOf<Self>>,
        ActiveModelOf<Self>: Send;

    /// Lazy select over the rows matching the criteria
    fn filter(&self, criteria: Criteria) -> Select<Self::Entity> {
        let select = Self::Entity::find();
        match self.scope(criteria) {
            Some(condition) => select.filter(condition),
            None => select,
        }
    }

    /// Lazy select over every row the manager exposes by default
    fn all(&self) -> Select<Self::Entity> {
        self.filter(Criteria::new())
    }

    /// Lazy select over the rows NOT matching the criteria
    fn exclude(&self, criteria: Criteria) -> Select<Self::Entity> {
        let select = Self::Entity::find();
        match self.exclusion(criteria) {
            Some(condition) => select.filter(condition.not()),
            None => select,
        }
    }

    /// Fetch exactly one matching row
    ///
    /// Fails with [`ModelError::ModelNotFound`] when nothing matches and
    /// [`ModelError::MultipleObjectsReturned`] when several rows do.
    async fn get<C>(&self, db: &C, criteria: Criteria) -> Result<ModelOf<Self>, ModelError>
    where
        C: ConnectionTrait,
    {
        let mut rows = self
            .filter(criteria)
            .limit(MAX_GET_RESULTS)
            .all(db)
            .await?;

        match rows.len() {
            0 => Err(ModelError::model_not_found(model_name::<Self::Entity>())),
            1 => Ok(rows.remove(0)),
            n => Err(ModelError::multiple_objects(model_name::<Self::Entity>(), n)),
        }
    }

    /// First matching row by primary key, if any
    async fn first<C>(
        &self,
        db: &C,
        criteria: Criteria,
    ) -> Result<Option<ModelOf<Self>>, ModelError>
    where
        C: ConnectionTrait,
    {
        let select = order_by_pk(self.filter(criteria), Order::Asc);
        Ok(select.one(db).await?)
    }

    /// Last matching row by primary key, if any
    async fn last<C>(
        &self,
        db: &C,
        criteria: Criteria,
    ) -> Result<Option<ModelOf<Self>>, ModelError>
    where
        C: ConnectionTrait,
    {
        let select = order_by_pk(self.filter(criteria), Order::Desc);
        Ok(select.one(db).await?)
    }

    /// Whether any row matches
    async fn exists<C>(&self, db: &C, criteria: Criteria) -> Result<bool, ModelError>
    where
        C: ConnectionTrait,
    {
        Ok(self.filter(criteria).one(db).await?.is_some())
    }

    /// Number of matching rows
    async fn count<C>(&self, db: &C, criteria: Criteria) -> Result<u64, ModelError>
    where
        C: ConnectionTrait,
        ModelOf<Self>: Sync,
    {
        Ok(self.filter(criteria).count(db).await?)
    }

    /// Fetch the matching row, or insert `defaults` when there is none
    ///
    /// Returns the row and whether it was created. `defaults` must carry
    /// every value the new row needs, including the lookup fields.
    async fn get_or_create<C>(
        &self,
        db: &C,
        criteria: Criteria,
        defaults: ActiveModelOf<Self>,
    ) -> Result<(ModelOf<Self>, bool), ModelError>
    where
        C: ConnectionTrait,
        ModelOf<Self>: IntoActiveModel<ActiveModelOf<Self>>,
        ActiveModelOf<Self>: Send,
    {
        match self.get(db, criteria.clone()).await {
            Ok(found) => Ok((found, false)),
            Err(ModelError::ModelNotFound { .. }) => {
                let mut active = defaults;
                self.prepare_insert(&criteria, &mut active);
                let created = active.insert(db).await?;
                tracing::debug!(
                    table = %model_name::<Self::Entity>(),
                    "get_or_create inserted row"
                );
                Ok((created, true))
            }
            Err(e) => Err(e),
        }
    }

    /// Update the matching row with every set field of `values`, or insert
    /// `values` when there is none
    ///
    /// Primary key fields of `values` are never copied onto an existing row.
    /// Returns the row and whether it was created.
    async fn update_or_create<C>(
        &self,
        db: &C,
        criteria: Criteria,
        values: ActiveModelOf<Self>,
    ) -> Result<(ModelOf<Self>, bool), ModelError>
    where
        C: ConnectionTrait,
        ModelOf<Self>: IntoActiveModel<ActiveModelOf<Self>>,
        ActiveModelOf<Self>: Send,
    {
        match self.get(db, criteria.clone()).await {
            Ok(found) => {
                let mut active = found.into_active_model();
                copy_set_fields(&mut active, &values);
                let updated = active.update(db).await?;
                Ok((updated, false))
            }
            Err(ModelError::ModelNotFound { .. }) => {
                let mut active = values;
                self.prepare_insert(&criteria, &mut active);
                let created = active.insert(db).await?;
                tracing::debug!(
                    table = %model_name::<Self::Entity>(),
                    "update_or_create inserted row"
                );
                Ok((created, true))
            }
            Err(e) => Err(e),
        }
    }
}

/// Manager for entities whose rows are physically deleted
///
/// Criteria are used exactly as given; any deleted-flag request on them is
/// ignored since these entities carry no such column.
pub struct CurdManager<E> {
    entity: PhantomData<E>,
}

impl<E> CurdManager<E> {
    pub fn new() -> Self {
        Self {
            entity: PhantomData,
        }
    }
}

impl<E> Default for CurdManager<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for CurdManager<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for CurdManager<E>
where
    E: EntityTrait,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurdManager")
            .field("table", &model_name::<E>())
            .finish()
    }
}

#[async_trait]
impl<E> Manager for CurdManager<E>
where
    E: EntityTrait,
{
    type Entity = E;

    fn scope(&self, criteria: Criteria) -> Option<Condition> {
        if criteria.is_empty() {
            None
        } else {
            Some(criteria.into_condition())
        }
    }

    fn exclusion(&self, criteria: Criteria) -> Option<Condition> {
        self.scope(criteria)
    }

    async fn remove_where<C>(&self, db: &C, criteria: Criteria) -> Result<u64, ModelError>
    where
        C: ConnectionTrait,
    {
        let mut delete = E::delete_many();
        if let Some(condition) = self.scope(criteria) {
            delete = delete.filter(condition);
        }
        let result = delete.exec(db).await?;

        tracing::info!(
            table = %model_name::<E>(),
            rows = result.rows_affected,
            "Deleted rows"
        );
        Ok(result.rows_affected)
    }

    async fn remove<C>(&self, db: &C, model: ModelOf<Self>) -> Result<(), ModelError>
    where
        C: ConnectionTrait,
        ModelOf<Self>: IntoActiveModel<ActiveModelOf<Self>>,
        ActiveModelOf<Self>: Send,
    {
        model.into_active_model().delete(db).await?;
        Ok(())
    }
}

/// Table name of an entity, used in errors and log fields
pub(crate) fn model_name<E: EntityTrait>() -> String {
    E::default().table_name().to_string()
}

/// Order a select by every primary key column
pub(crate) fn order_by_pk<E: EntityTrait>(select: Select<E>, order: Order) -> Select<E> {
    E::PrimaryKey::iter().fold(select, |select, pk| {
        select.order_by(pk.into_column(), order.clone())
    })
}

/// Copy every `Set` field of `source` onto `target`, primary keys excepted
pub(crate) fn copy_set_fields<A>(target: &mut A, source: &A)
where
    A: ActiveModelTrait,
{
    let pk_columns: Vec<String> = <A::Entity as EntityTrait>::PrimaryKey::iter()
        .map(|pk| pk.into_column().as_str().to_string())
        .collect();

    for column in <A::Entity as EntityTrait>::Column::iter() {
        if pk_columns.iter().any(|pk| pk == column.as_str()) {
            continue;
        }
        if let ActiveValue::Set(value) = source.get(column) {
            target.set(column, value);
        }
    }
}
