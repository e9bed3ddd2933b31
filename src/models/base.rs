//! Base entity conventions.
//!
//! Every persisted entity carries an integer primary key, UTC timestamps
//! and an indexed soft-delete flag:
//!
//! ```sql
//! id         INTEGER PRIMARY KEY AUTOINCREMENT,
//! created_at TEXT    NOT NULL,   -- DateTimeUtc
//! updated_at TEXT    NOT NULL,   -- DateTimeUtc
//! deleted    BOOLEAN NOT NULL DEFAULT 0
//! ```
//!
//! A soft-deleted row is never physically removed; the flag is set and the
//! row becomes invisible to every repository read path.

use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait};

/// Static column descriptors for the base fields shared by all entities.
///
/// This trait is what lets [`crate::Repository`] query any entity without
/// runtime introspection: the relation map comes from SeaORM's
/// `Related<R>` impls, the base columns and the optional "active"
/// capability come from here, all checked at compile time.
///
/// `created_at` and `updated_at` must be `DateTimeUtc` columns; the
/// repository fills them on insert and maintains `updated_at` on update.
pub trait BaseEntity: EntityTrait {
    /// The entity's write-side payload. A partially-set one expresses a
    /// partial update.
    type ActiveModel: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send;

    /// Integer primary key column.
    fn id_column() -> Self::Column;

    /// Insert timestamp column.
    fn created_at_column() -> Self::Column;

    /// Last-write timestamp column.
    fn updated_at_column() -> Self::Column;

    /// Soft-delete flag column.
    fn deleted_column() -> Self::Column;

    /// Active flag column, for entities with an "active" concept.
    ///
    /// When an entity exposes this, eagerly loaded relations of that type
    /// are narrowed to active rows unless the caller asks for inactive
    /// ones as well.
    fn active_column() -> Option<Self::Column> {
        None
    }
}
