#![allow(dead_code)]

use sea_orm_migration::prelude::*;
use ycutils::database::schema;
use ycutils::testing::TestDatabase;

/// Notes are physically deleted
pub mod notes {
    use sea_orm::entity::prelude::*;
    use sea_orm::{ConnectionTrait, Set};
    use ycutils::database::timestamps::touch;
    use ycutils::{BaseModel, CurdManager};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "notes")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub body: String,
        pub pinned: bool,
        pub create_at: DateTimeUtc,
        pub modify_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    #[async_trait::async_trait]
    impl ActiveModelBehavior for ActiveModel {
        async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            touch(&mut self, insert);
            Ok(self)
        }
    }

    impl BaseModel for Entity {
        fn create_at_column() -> Column {
            Column::CreateAt
        }

        fn modify_at_column() -> Column {
            Column::ModifyAt
        }
    }

    impl ycutils::Model for Entity {
        type Manager = CurdManager<Self>;
    }

    pub fn new(body: &str, pinned: bool) -> ActiveModel {
        ActiveModel {
            body: Set(body.to_string()),
            pinned: Set(pinned),
            ..Default::default()
        }
    }
}

/// Todos are soft-deleted and kept for the default 30 days
pub mod todos {
    use sea_orm::entity::prelude::*;
    use sea_orm::{ConnectionTrait, Set};
    use ycutils::database::timestamps::touch;
    use ycutils::{BaseModel, SoftDelManager, SoftDeleteModel};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "todos")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub title: String,
        pub done: bool,
        pub deleted: bool,
        pub create_at: DateTimeUtc,
        pub modify_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    #[async_trait::async_trait]
    impl ActiveModelBehavior for ActiveModel {
        async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            touch(&mut self, insert);
            Ok(self)
        }
    }

    impl BaseModel for Entity {
        fn create_at_column() -> Column {
            Column::CreateAt
        }

        fn modify_at_column() -> Column {
            Column::ModifyAt
        }
    }

    impl SoftDeleteModel for Entity {
        fn deleted_column() -> Column {
            Column::Deleted
        }
    }

    impl ycutils::Model for Entity {
        type Manager = SoftDelManager<Self>;
    }

    pub fn new(title: &str, done: bool) -> ActiveModel {
        ActiveModel {
            title: Set(title.to_string()),
            done: Set(done),
            ..Default::default()
        }
    }
}

/// Drafts are soft-deleted and kept for one hour
pub mod drafts {
    use sea_orm::entity::prelude::*;
    use sea_orm::{ConnectionTrait, Set};
    use ycutils::database::timestamps::touch;
    use ycutils::{BaseModel, SoftDelManager, SoftDeleteModel};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "drafts")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub text: String,
        pub deleted: bool,
        pub create_at: DateTimeUtc,
        pub modify_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    #[async_trait::async_trait]
    impl ActiveModelBehavior for ActiveModel {
        async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            touch(&mut self, insert);
            Ok(self)
        }
    }

    impl BaseModel for Entity {
        fn create_at_column() -> Column {
            Column::CreateAt
        }

        fn modify_at_column() -> Column {
            Column::ModifyAt
        }
    }

    impl SoftDeleteModel for Entity {
        const SAFE_RETAIN_TIME: u64 = 60 * 60;

        fn deleted_column() -> Column {
            Column::Deleted
        }
    }

    impl ycutils::Model for Entity {
        type Manager = SoftDelManager<Self>;
    }

    pub fn new(text: &str) -> ActiveModel {
        ActiveModel {
            text: Set(text.to_string()),
            ..Default::default()
        }
    }
}

/// Memos keep timezone-aware timestamps and are soft-deleted
pub mod memos {
    use chrono::Utc;
    use sea_orm::entity::prelude::*;
    use sea_orm::{ConnectionTrait, Set, Value};
    use ycutils::database::timestamps::touch;
    use ycutils::{BaseModel, SoftDelManager, SoftDeleteModel};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "memos")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub text: String,
        pub deleted: bool,
        pub create_at: DateTimeWithTimeZone,
        pub modify_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    #[async_trait::async_trait]
    impl ActiveModelBehavior for ActiveModel {
        async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            touch(&mut self, insert);
            Ok(self)
        }
    }

    impl BaseModel for Entity {
        fn create_at_column() -> Column {
            Column::CreateAt
        }

        fn modify_at_column() -> Column {
            Column::ModifyAt
        }

        fn timestamp_now() -> Value {
            Utc::now().fixed_offset().into()
        }
    }

    impl SoftDeleteModel for Entity {
        fn deleted_column() -> Column {
            Column::Deleted
        }
    }

    impl ycutils::Model for Entity {
        type Manager = SoftDelManager<Self>;
    }

    pub fn new(text: &str) -> ActiveModel {
        ActiveModel {
            text: Set(text.to_string()),
            ..Default::default()
        }
    }
}

pub async fn setup_db() -> TestDatabase {
    TestDatabase::fresh::<TestMigrator>()
        .await
        .expect("test db")
}

pub struct TestMigrator;

#[async_trait::async_trait]
impl MigratorTrait for TestMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(CreateNotesTable),
            Box::new(CreateTodosTable),
            Box::new(CreateDraftsTable),
            Box::new(CreateMemosTable),
        ]
    }
}

pub struct CreateNotesTable;

impl MigrationName for CreateNotesTable {
    fn name(&self) -> &str {
        "m0001_create_notes"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateNotesTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notes::Body).string().not_null())
                    .col(ColumnDef::new(Notes::Pinned).boolean().not_null())
                    .col(&mut schema::create_at_column(Notes::CreateAt))
                    .col(&mut schema::modify_at_column(Notes::ModifyAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notes::Table).to_owned())
            .await
    }
}

pub struct CreateTodosTable;

impl MigrationName for CreateTodosTable {
    fn name(&self) -> &str {
        "m0002_create_todos"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateTodosTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Todos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Todos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Todos::Title).string().not_null())
                    .col(ColumnDef::new(Todos::Done).boolean().not_null())
                    .col(&mut schema::deleted_column(Todos::Deleted))
                    .col(&mut schema::create_at_column(Todos::CreateAt))
                    .col(&mut schema::modify_at_column(Todos::ModifyAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(schema::deleted_index(Todos::Table, Todos::Deleted))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Todos::Table).to_owned())
            .await
    }
}

pub struct CreateDraftsTable;

impl MigrationName for CreateDraftsTable {
    fn name(&self) -> &str {
        "m0003_create_drafts"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateDraftsTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drafts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Drafts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Drafts::Text).string().not_null())
                    .col(&mut schema::deleted_column(Drafts::Deleted))
                    .col(&mut schema::create_at_column(Drafts::CreateAt))
                    .col(&mut schema::modify_at_column(Drafts::ModifyAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(schema::deleted_index(Drafts::Table, Drafts::Deleted))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drafts::Table).to_owned())
            .await
    }
}

pub struct CreateMemosTable;

impl MigrationName for CreateMemosTable {
    fn name(&self) -> &str {
        "m0004_create_memos"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateMemosTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Memos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Memos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Memos::Text).string().not_null())
                    .col(&mut schema::deleted_column(Memos::Deleted))
                    .col(&mut schema::create_at_column(Memos::CreateAt))
                    .col(&mut schema::modify_at_column(Memos::ModifyAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Memos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Notes {
    Table,
    Id,
    Body,
    Pinned,
    CreateAt,
    ModifyAt,
}

#[derive(DeriveIden)]
enum Todos {
    Table,
    Id,
    Title,
    Done,
    Deleted,
    CreateAt,
    ModifyAt,
}

#[derive(DeriveIden)]
enum Drafts {
    Table,
    Id,
    Text,
    Deleted,
    CreateAt,
    ModifyAt,
}

#[derive(DeriveIden)]
enum Memos {
    Table,
    Id,
    Text,
    Deleted,
    CreateAt,
    ModifyAt,
}
