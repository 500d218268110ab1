//! Query criteria passed to managers
//!
//! A [`Criteria`] is an AND of filter expressions plus an explicit,
//! optional request about the soft-delete flag. Leaving the flag unset
//! lets the manager apply its default (soft-delete managers only return
//! live rows).

use sea_orm::sea_query::IntoCondition;
use sea_orm::Condition;

/// Which rows a caller asked for with respect to the deleted flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletedScope {
    /// Only rows with `deleted = false`
    Live,
    /// Only rows with `deleted = true`
    Deleted,
    /// Live and deleted rows alike
    Any,
}

impl DeletedScope {
    /// Flag value a row must carry to match, `None` for [`DeletedScope::Any`]
    pub fn flag(self) -> Option<bool> {
        match self {
            Self::Live => Some(false),
            Self::Deleted => Some(true),
            Self::Any => None,
        }
    }
}

impl From<bool> for DeletedScope {
    fn from(deleted: bool) -> Self {
        if deleted {
            Self::Deleted
        } else {
            Self::Live
        }
    }
}

/// Filter criteria for manager operations
///
/// # Example
///
/// ```rust,ignore
/// use ycutils::Criteria;
///
/// // title = 'groceries' AND done = false, live rows only (the default)
/// let live = Criteria::new()
///     .add(todos::Column::Title.eq("groceries"))
///     .add(todos::Column::Done.eq(false));
///
/// // same, restricted to soft-deleted rows
/// let trashed = live.clone().deleted(true);
///
/// // no restriction on the deleted flag at all
/// let everything = Criteria::new().with_deleted();
/// ```
#[derive(Debug, Clone)]
pub struct Criteria {
    condition: Condition,
    deleted: Option<DeletedScope>,
}

impl Criteria {
    /// Criteria matching every row
    pub fn new() -> Self {
        Self {
            condition: Condition::all(),
            deleted: None,
        }
    }

    /// AND another expression or condition onto the criteria
    ///
    /// Empty conditions restrict nothing and are skipped.
    pub fn add<F: IntoCondition>(mut self, filter: F) -> Self {
        let filter = filter.into_condition();
        if !filter.is_empty() {
            self.condition = self.condition.add(filter);
        }
        self
    }

    /// Explicitly request rows whose deleted flag equals `deleted`
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = Some(deleted.into());
        self
    }

    /// Explicitly request rows regardless of their deleted flag
    pub fn with_deleted(mut self) -> Self {
        self.deleted = Some(DeletedScope::Any);
        self
    }

    /// The explicit deleted-flag request, `None` when the caller made none
    pub fn deleted_scope(&self) -> Option<DeletedScope> {
        self.deleted
    }

    /// Whether the caller said anything about the deleted flag
    pub fn mentions_deleted(&self) -> bool {
        self.deleted.is_some()
    }

    /// True when no filter expression was added
    pub fn is_empty(&self) -> bool {
        self.condition.is_empty()
    }

    /// The filter expressions, without any deleted-flag clause
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Consume the criteria, returning the filter expressions
    pub fn into_condition(self) -> Condition {
        self.condition
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Condition> for Criteria {
    fn from(condition: Condition) -> Self {
        Self::new().add(condition)
    }
}
