//! Soft delete
//!
//! Rows of a [`SoftDeleteModel`] are never removed by `remove` or
//! `remove_where`; their deleted flag is set instead and they drop out of
//! every default read. A row only leaves the table once it has stayed
//! deleted for longer than the entity's retention window and
//! [`SoftDelManager::delete_expired_objects`] runs.
//!
//! Reads default to live rows. Callers opt out through the criteria:
//!
//! ```rust,ignore
//! let objects = todos::Entity::objects();
//!
//! objects.filter(Criteria::new());                   // live rows
//! objects.filter(Criteria::new().deleted(true));     // deleted rows
//! objects.filter(Criteria::new().with_deleted());    // both
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryFilter,
};
use std::marker::PhantomData;

use crate::database::criteria::{Criteria, DeletedScope};
use crate::database::manager::{model_name, ActiveModelOf, Manager, ModelOf};
use crate::database::model::SoftDeleteModel;
use crate::error::ModelError;

/// Manager for [`SoftDeleteModel`] entities
///
/// Every read adds `deleted = false` unless the criteria say otherwise,
/// removal sets the flag instead of deleting, and `exclude` never brings
/// deleted rows back.
pub struct SoftDelManager<E> {
    entity: PhantomData<E>,
}

impl<E> SoftDelManager<E> {
    pub fn new() -> Self {
        Self {
            entity: PhantomData,
        }
    }
}

impl<E> Default for SoftDelManager<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for SoftDelManager<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for SoftDelManager<E>
where
    E: EntityTrait,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoftDelManager")
            .field("table", &model_name::<E>())
            .finish()
    }
}

impl<E> SoftDelManager<E>
where
    E: SoftDeleteModel,
{
    /// Scope requested by the criteria, live rows when they say nothing
    fn requested_scope(criteria: &Criteria) -> DeletedScope {
        criteria.deleted_scope().unwrap_or(DeletedScope::Live)
    }

    /// The criteria ANDed with `deleted = flag`, or alone when `flag` is `None`
    fn with_flag(criteria: Criteria, flag: Option<bool>) -> Option<Condition> {
        let flag = flag.map(|flag| E::deleted_column().eq(flag));
        match (criteria.is_empty(), flag) {
            (true, None) => None,
            (true, Some(flag)) => Some(Condition::all().add(flag)),
            (false, None) => Some(criteria.into_condition()),
            (false, Some(flag)) => Some(criteria.into_condition().add(flag)),
        }
    }

    /// Physically delete rows deleted for longer than the retention window
    ///
    /// Returns the number of rows removed.
    pub async fn delete_expired_objects<C>(&self, db: &C) -> Result<u64, ModelError>
    where
        C: ConnectionTrait,
    {
        self.delete_expired_objects_at(db, Utc::now()).await
    }

    /// [`delete_expired_objects`](Self::delete_expired_objects) with an
    /// explicit current time
    ///
    /// Rows qualify when `deleted = true` and `modify_at` is strictly older
    /// than `now - SAFE_RETAIN_TIME`.
    pub async fn delete_expired_objects_at<C>(
        &self,
        db: &C,
        now: DateTime<Utc>,
    ) -> Result<u64, ModelError>
    where
        C: ConnectionTrait,
    {
        let Some(cutoff) = now.checked_sub_signed(E::safe_retain_duration()) else {
            // window reaches past the earliest representable time
            return Ok(0);
        };
        let result = E::delete_many()
            .filter(E::deleted_column().eq(true))
            .filter(E::modify_at_column().lt(cutoff))
            .exec(db)
            .await?;

        tracing::info!(
            table = %model_name::<E>(),
            rows = result.rows_affected,
            %cutoff,
            "Purged expired soft-deleted rows"
        );
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl<E> Manager for SoftDelManager<E>
where
    E: SoftDeleteModel,
{
    type Entity = E;

    fn scope(&self, criteria: Criteria) -> Option<Condition> {
        let flag = Self::requested_scope(&criteria).flag();
        Self::with_flag(criteria, flag)
    }

    fn exclusion(&self, criteria: Criteria) -> Option<Condition> {
        if criteria.mentions_deleted() {
            // explicit flag: exclude exactly what the criteria describe
            let flag = criteria.deleted_scope().and_then(DeletedScope::flag);
            return Self::with_flag(criteria, flag);
        }

        // no flag: deleted rows are always part of the excluded set
        let deleted = E::deleted_column().eq(true);
        if criteria.is_empty() {
            Some(Condition::all().add(deleted))
        } else {
            Some(
                Condition::any()
                    .add(criteria.into_condition())
                    .add(deleted),
            )
        }
    }

    fn prepare_insert(&self, criteria: &Criteria, active: &mut ActiveModelOf<Self>) {
        let column = E::deleted_column();
        if let Some(flag) = Self::requested_scope(criteria).flag() {
            if !active.get(column).is_set() {
                active.set(column, flag.into());
            }
        }
    }

    async fn remove_where<C>(&self, db: &C, criteria: Criteria) -> Result<u64, ModelError>
    where
        C: ConnectionTrait,
    {
        let mut update = E::update_many()
            .col_expr(E::deleted_column(), Expr::value(true))
            .col_expr(E::modify_at_column(), Expr::value(E::timestamp_now()));
        if let Some(condition) = self.scope(criteria) {
            update = update.filter(condition);
        }
        let result = update.exec(db).await?;

        tracing::info!(
            table = %model_name::<E>(),
            rows = result.rows_affected,
            "Soft-deleted rows"
        );
        Ok(result.rows_affected)
    }

    async fn remove<C>(&self, db: &C, model: ModelOf<Self>) -> Result<(), ModelError>
    where
        C: ConnectionTrait,
        ModelOf<Self>: IntoActiveModel<ActiveModelOf<Self>>,
        ActiveModelOf<Self>: Send,
    {
        let mut active = model.into_active_model();
        active.set(E::deleted_column(), true.into());
        active.set(E::modify_at_column(), E::timestamp_now());
        active.update(db).await?;

        tracing::info!(table = %model_name::<E>(), "Soft-deleted row");
        Ok(())
    }
}
