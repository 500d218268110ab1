//! Migration helpers for the conventional model columns
//!
//! # Example
//!
//! ```rust,ignore
//! use sea_orm_migration::prelude::*;
//! use ycutils::database::schema;
//!
//! manager
//!     .create_table(
//!         Table::create()
//!             .table(Todos::Table)
//!             .col(ColumnDef::new(Todos::Id).integer().not_null().auto_increment().primary_key())
//!             .col(ColumnDef::new(Todos::Title).string().not_null())
//!             .col(&mut schema::deleted_column(Todos::Deleted))
//!             .col(&mut schema::create_at_column(Todos::CreateAt))
//!             .col(&mut schema::modify_at_column(Todos::ModifyAt))
//!             .to_owned(),
//!     )
//!     .await?;
//!
//! manager
//!     .create_index(schema::deleted_index(Todos::Table, Todos::Deleted))
//!     .await?;
//! ```

use sea_orm_migration::prelude::*;

/// Creation timestamp column
pub fn create_at_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

/// Modification timestamp column
pub fn modify_at_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

/// Soft-delete flag column, not null and false by default
pub fn deleted_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .boolean()
        .not_null()
        .default(false)
        .to_owned()
}

/// Index on the soft-delete flag, named `idx_<table>_<column>`
pub fn deleted_index<T, C>(table: T, column: C) -> IndexCreateStatement
where
    T: IntoIden,
    C: IntoIden,
{
    let table = table.into_iden();
    let column = column.into_iden();
    Index::create()
        .name(format!("idx_{}_{}", table.to_string(), column.to_string()))
        .table(table)
        .col(column)
        .to_owned()
}
