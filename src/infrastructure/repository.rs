//! Generic CRUD repository over any [`BaseEntity`].
//!
//! Soft-delete visibility is the one invariant enforced on every read
//! path: `get`, `list` and relation loading all exclude rows whose deleted
//! flag is set, regardless of filters or flags.

use std::marker::PhantomData;
use std::str::FromStr;

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, IdenStatic,
    IntoActiveModel, Iterable, JoinType, LoaderTrait, QueryFilter, QueryOrder, QuerySelect,
    Related, RelationDef, Select, Value,
};

use crate::domain::errors::{AppError, HttpError};
use crate::models::BaseEntity;
use crate::types::{FilterMap, JsonValue};

/// Pagination keys are excluded from filter application when a caller
/// leaves them in the filter map.
const PAGINATION_KEYS: [&str; 2] = ["skip", "limit"];

/// Default page size for [`Repository::list`].
pub const DEFAULT_LIMIT: u64 = 50;

/// Uniform CRUD + listing over one entity type.
///
/// Stateless; every method takes the connection so calls compose inside a
/// [`crate::db::with_session`] unit of work or run directly on the engine.
pub struct Repository<E: BaseEntity> {
    _entity: PhantomData<E>,
}

impl<E: BaseEntity> Default for Repository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: BaseEntity> Repository<E> {
    pub fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }

    /// Persist a new entity and return it reloaded from the store, so
    /// store-computed values (id, defaults) are surfaced.
    ///
    /// Base columns the caller left unset are defaulted here: timestamps
    /// to now, the soft-delete flag to false. No validation beyond what
    /// the storage layer enforces.
    pub async fn add<C>(&self, db: &C, mut item: E::ActiveModel) -> Result<E::Model, AppError>
    where
        C: ConnectionTrait,
        E::Model: IntoActiveModel<E::ActiveModel>,
    {
        let now = Utc::now();
        if matches!(item.get(E::created_at_column()), ActiveValue::NotSet) {
            item.set(E::created_at_column(), now.into());
        }
        if matches!(item.get(E::updated_at_column()), ActiveValue::NotSet) {
            item.set(E::updated_at_column(), now.into());
        }
        if matches!(item.get(E::deleted_column()), ActiveValue::NotSet) {
            item.set(E::deleted_column(), false.into());
        }

        Ok(item.insert(db).await?)
    }

    /// Fetch one row by id, excluding soft-deleted rows.
    pub async fn get<C>(&self, db: &C, id: i32) -> Result<E::Model, AppError>
    where
        C: ConnectionTrait,
    {
        let record = E::find()
            .filter(E::id_column().eq(id))
            .filter(E::deleted_column().eq(false))
            .one(db)
            .await?;

        record.ok_or_else(|| {
            AppError::Http(HttpError::not_found(format!("Item not found with id: {id}")))
        })
    }

    /// [`Repository::get`] plus the row's `R` relations, loaded in the
    /// same query through a left join.
    ///
    /// The join's ON clause excludes soft-deleted related rows always, and
    /// inactive ones unless `include_inactive` is set. Fan-out from a
    /// one-to-many join is consolidated so the base row appears once.
    pub async fn get_with<R, C>(
        &self,
        db: &C,
        id: i32,
        include_inactive: bool,
    ) -> Result<(E::Model, Vec<R::Model>), AppError>
    where
        C: ConnectionTrait,
        R: BaseEntity,
        E: Related<R>,
    {
        let pairs = E::find()
            .filter(E::id_column().eq(id))
            .filter(E::deleted_column().eq(false))
            .join(JoinType::LeftJoin, eager_join::<E, R>(include_inactive))
            .order_by_asc(E::id_column())
            .select_with(R::default())
            .all(db)
            .await?;

        pairs.into_iter().next().ok_or_else(|| {
            AppError::Http(HttpError::not_found(format!("Item not found with id: {id}")))
        })
    }

    /// Page through non-deleted rows, ordered by id ascending, each
    /// filter entry applied as a column equality. A null filter value
    /// selects rows where the column is NULL.
    ///
    /// Filter attribute names resolve to columns at the storage boundary;
    /// an unknown name is a 400-shaped error. `skip`/`limit` keys left in
    /// the filter map are ignored.
    pub async fn list<C>(
        &self,
        db: &C,
        skip: u64,
        limit: u64,
        filters: Option<&FilterMap>,
    ) -> Result<Vec<E::Model>, AppError>
    where
        C: ConnectionTrait,
    {
        let mut stmt = E::find()
            .filter(E::deleted_column().eq(false))
            .order_by_asc(E::id_column())
            .offset(skip)
            .limit(limit);

        if let Some(filters) = filters {
            stmt = apply_filters::<E>(stmt, filters)?;
        }

        Ok(stmt.all(db).await?)
    }

    /// [`Repository::list`] with each base row paired with its related
    /// `R` rows, under the same soft-delete/active rules as
    /// [`Repository::get_with`].
    ///
    /// The page is selected first and relations are loaded against it, so
    /// `limit` counts entities and join fan-out cannot duplicate base
    /// rows.
    pub async fn list_with<R, C>(
        &self,
        db: &C,
        skip: u64,
        limit: u64,
        filters: Option<&FilterMap>,
        include_inactive: bool,
    ) -> Result<Vec<(E::Model, Vec<R::Model>)>, AppError>
    where
        C: ConnectionTrait,
        R: BaseEntity,
        E: Related<R>,
        E::Model: Sync,
        R::Model: Sync,
    {
        let page = self.list(db, skip, limit, filters).await?;
        let related = page
            .load_many(related_select::<R>(include_inactive), db)
            .await?;

        Ok(page.into_iter().zip(related).collect())
    }

    /// Merge a partial payload onto a loaded row and persist it.
    ///
    /// Every column explicitly set in `patch` overwrites the loaded value,
    /// except `created_at` and `updated_at`, which are never taken from
    /// the payload. `updated_at` is maintained server-side. Unset columns
    /// stay untouched (partial-update, not replace semantics). Returns the
    /// row reloaded from the store.
    pub async fn update<C>(
        &self,
        db: &C,
        model: E::Model,
        patch: E::ActiveModel,
    ) -> Result<E::Model, AppError>
    where
        C: ConnectionTrait,
        E::Model: IntoActiveModel<E::ActiveModel>,
    {
        let created_at_col = E::created_at_column();
        let updated_at_col = E::updated_at_column();
        let created_at = created_at_col.as_str();
        let updated_at = updated_at_col.as_str();

        let mut merged = model.into_active_model();
        for column in E::Column::iter() {
            if column.as_str() == created_at || column.as_str() == updated_at {
                continue;
            }
            if let ActiveValue::Set(value) = patch.get(column) {
                merged.set(column, value);
            }
        }
        merged.set(E::updated_at_column(), Utc::now().into());

        Ok(merged.update(db).await?)
    }

    /// Soft-delete one row: load by id (404 when absent or already
    /// soft-deleted), set the flag and nothing else. Does not cascade to
    /// related entities.
    pub async fn delete<C>(&self, db: &C, id: i32) -> Result<(), AppError>
    where
        C: ConnectionTrait,
        E::Model: IntoActiveModel<E::ActiveModel>,
    {
        let record = self.get(db, id).await?;

        let mut flagged = record.into_active_model();
        flagged.set(E::deleted_column(), true.into());
        flagged.update(db).await?;

        Ok(())
    }
}

/// Relation definition for a joined eager load, with the soft-delete (and
/// optionally active) predicates pushed into the join's ON clause so base
/// rows without surviving relations are not dropped.
fn eager_join<E, R>(include_inactive: bool) -> RelationDef
where
    E: BaseEntity + Related<R>,
    R: BaseEntity,
{
    <E as Related<R>>::to().on_condition(move |_left, right| {
        let mut related = Condition::all()
            .add(Expr::col((right.clone(), R::deleted_column())).eq(false));
        if !include_inactive && let Some(active) = R::active_column() {
            related = related.add(Expr::col((right, active)).eq(true));
        }
        related
    })
}

/// Relation-side select for loader-based eager loading.
fn related_select<R: BaseEntity>(include_inactive: bool) -> Select<R> {
    let mut stmt = R::find().filter(R::deleted_column().eq(false));
    if !include_inactive && let Some(active) = R::active_column() {
        stmt = stmt.filter(active.eq(true));
    }
    stmt
}

fn apply_filters<E: BaseEntity>(
    mut stmt: Select<E>,
    filters: &FilterMap,
) -> Result<Select<E>, AppError> {
    for (attr, value) in filters {
        if PAGINATION_KEYS.contains(&attr.as_str()) {
            continue;
        }
        let column = E::Column::from_str(attr).map_err(|_| {
            AppError::Http(HttpError::new(
                400,
                format!("unknown filter attribute: {attr}"),
                JsonValue::Null,
            ))
        })?;
        // A null filter value means "the column is NULL", not equality
        // against NULL (which no row would ever satisfy).
        stmt = match value {
            serde_json::Value::Null => stmt.filter(column.is_null()),
            other => stmt.filter(column.eq(filter_value(other))),
        };
    }
    Ok(stmt)
}

fn filter_value(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Bool(flag) => (*flag).into(),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                int.into()
            } else if let Some(unsigned) = number.as_u64() {
                unsigned.into()
            } else if let Some(float) = number.as_f64() {
                float.into()
            } else {
                Value::BigInt(None)
            }
        }
        serde_json::Value::String(text) => text.clone().into(),
        other => Value::Json(Some(Box::new(other.clone()))),
    }
}
