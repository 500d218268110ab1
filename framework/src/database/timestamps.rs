//! Automatic `create_at` / `modify_at` stamping

use sea_orm::ActiveModelTrait;

use crate::database::model::BaseModel;

/// Stamp the timestamp columns of an active model about to be saved
///
/// On insert `create_at` is set unless the caller already set it. On
/// update any change to `create_at` is dropped from the statement, so the
/// creation time never moves. `modify_at` is set to
/// [`BaseModel::timestamp_now`] in both cases.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait::async_trait]
/// impl ActiveModelBehavior for ActiveModel {
///     async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
///     where
///         C: ConnectionTrait,
///     {
///         ycutils::database::timestamps::touch(&mut self, insert);
///         Ok(self)
///     }
/// }
/// ```
pub fn touch<A>(active: &mut A, insert: bool)
where
    A: ActiveModelTrait,
    A::Entity: BaseModel,
{
    let now = <A::Entity as BaseModel>::timestamp_now();
    let create_at = <A::Entity as BaseModel>::create_at_column();
    let modify_at = <A::Entity as BaseModel>::modify_at_column();

    if insert {
        if !active.get(create_at).is_set() {
            active.set(create_at, now.clone());
        }
    } else if active.get(create_at).is_set() {
        active.not_set(create_at);
    }

    active.set(modify_at, now);
}
