//! Model traits implemented on SeaORM entities

use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, Value};

use crate::database::manager::Manager;

/// Default retention for soft-deleted rows: 30 days, in seconds
pub const DEFAULT_SAFE_RETAIN_TIME: u64 = 60 * 60 * 24 * 30;

/// Entry point giving an entity its query manager
///
/// Pick [`CurdManager`](crate::CurdManager) for entities whose rows are
/// physically deleted, [`SoftDelManager`](crate::SoftDelManager) for
/// entities carrying a deleted flag.
///
/// # Example
///
/// ```rust,ignore
/// impl ycutils::Model for Entity {
///     type Manager = ycutils::SoftDelManager<Self>;
/// }
///
/// let open = todos::Entity::objects()
///     .count(&db, Criteria::new().add(todos::Column::Done.eq(false)))
///     .await?;
/// ```
pub trait Model: EntityTrait {
    /// Manager used for every query on this entity
    type Manager: Manager<Entity = Self> + Default;

    /// Get the entity's manager
    fn objects() -> Self::Manager {
        Self::Manager::default()
    }
}

/// Entity with creation and modification timestamps
///
/// `create_at` is written once on insert, `modify_at` on every save.
/// Stamping happens in [`touch`](crate::database::timestamps::touch), which
/// the entity calls from `ActiveModelBehavior::before_save`.
///
/// Timestamps are written as `DateTimeUtc`. Entities declaring their
/// timestamp fields with another chrono type override
/// [`timestamp_now`](BaseModel::timestamp_now):
///
/// ```rust,ignore
/// impl BaseModel for Entity {
///     fn create_at_column() -> Column { Column::CreateAt }
///     fn modify_at_column() -> Column { Column::ModifyAt }
///
///     // fields are `DateTimeWithTimeZone`
///     fn timestamp_now() -> Value {
///         Utc::now().fixed_offset().into()
///     }
/// }
/// ```
pub trait BaseModel: EntityTrait {
    /// Column set once when the row is inserted
    fn create_at_column() -> Self::Column;

    /// Column refreshed whenever the row is saved
    fn modify_at_column() -> Self::Column;

    /// Current time, typed like the entity's timestamp fields
    fn timestamp_now() -> Value {
        Utc::now().into()
    }
}

/// Entity whose rows are flagged deleted instead of removed
///
/// Flagged rows stay in the table until they have been deleted for longer
/// than [`SAFE_RETAIN_TIME`](SoftDeleteModel::SAFE_RETAIN_TIME) seconds,
/// measured from `modify_at`; after that
/// [`SoftDelManager::delete_expired_objects`](crate::SoftDelManager::delete_expired_objects)
/// purges them.
pub trait SoftDeleteModel: BaseModel {
    /// Seconds a deleted row is kept before it may be purged
    const SAFE_RETAIN_TIME: u64 = DEFAULT_SAFE_RETAIN_TIME;

    /// Boolean column holding the deleted flag
    fn deleted_column() -> Self::Column;

    /// Retention window as a duration
    fn safe_retain_duration() -> Duration {
        i64::try_from(Self::SAFE_RETAIN_TIME)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }
}
