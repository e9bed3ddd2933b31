#![allow(dead_code)]

//! Test fixtures: an in-memory database plus two entities exercising the
//! base-entity conventions (a project with many tasks, tasks carrying an
//! active flag).

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

pub mod project {
    use chassis::BaseEntity;
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "projects")]
    #[serde(deny_unknown_fields)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub status: String,
        pub description: Option<String>,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
        pub deleted: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::task::Entity")]
        Task,
    }

    impl Related<super::task::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Task.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl BaseEntity for Entity {
        type ActiveModel = ActiveModel;

        fn id_column() -> Self::Column {
            Column::Id
        }
        fn created_at_column() -> Self::Column {
            Column::CreatedAt
        }
        fn updated_at_column() -> Self::Column {
            Column::UpdatedAt
        }
        fn deleted_column() -> Self::Column {
            Column::Deleted
        }
    }
}

pub mod task {
    use chassis::BaseEntity;
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "tasks")]
    #[serde(deny_unknown_fields)]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub project_id: i32,
        pub title: String,
        pub is_active: bool,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
        pub deleted: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::project::Entity",
            from = "Column::ProjectId",
            to = "super::project::Column::Id"
        )]
        Project,
    }

    impl Related<super::project::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Project.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}

    impl BaseEntity for Entity {
        type ActiveModel = ActiveModel;

        fn id_column() -> Self::Column {
            Column::Id
        }
        fn created_at_column() -> Self::Column {
            Column::CreatedAt
        }
        fn updated_at_column() -> Self::Column {
            Column::UpdatedAt
        }
        fn deleted_column() -> Self::Column {
            Column::Deleted
        }
        fn active_column() -> Option<Self::Column> {
            Some(Column::IsActive)
        }
    }
}

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to init DB");

    let ddl = [
        r#"
        CREATE TABLE projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            status TEXT NOT NULL,
            description TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted BOOLEAN NOT NULL DEFAULT 0
        )
        "#,
        "CREATE INDEX idx_projects_deleted ON projects (deleted)",
        r#"
        CREATE TABLE tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL REFERENCES projects (id),
            title TEXT NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            deleted BOOLEAN NOT NULL DEFAULT 0
        )
        "#,
        "CREATE INDEX idx_tasks_deleted ON tasks (deleted)",
    ];

    for stmt in ddl {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            stmt.to_owned(),
        ))
        .await
        .expect("Failed to create schema");
    }

    db
}
