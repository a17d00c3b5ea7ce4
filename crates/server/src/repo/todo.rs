use chrono::{NaiveDate, Utc};
use shared_types::{AppError, NewTodo, Todo, TodoPatch};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Insert a new to-do. The id and creation time are assigned here.
pub async fn create(pool: &Pool<Postgres>, new: &NewTodo) -> Result<Todo, AppError> {
    let row = sqlx::query_as::<_, Todo>(
        r#"
        INSERT INTO todos (id, text, created_by, created_at, completed, date)
        VALUES ($1, $2, $3, $4, FALSE, $5)
        RETURNING id, text, created_by, created_at, completed, date
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new.text)
    .bind(&new.created_by)
    .bind(Utc::now())
    .bind(new.date)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Find a to-do by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Todo>, AppError> {
    let row = sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, text, created_by, created_at, completed, date
        FROM todos
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// List the to-dos filed under `date`, newest first.
pub async fn list_by_date(pool: &Pool<Postgres>, date: NaiveDate) -> Result<Vec<Todo>, AppError> {
    let rows = sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, text, created_by, created_at, completed, date
        FROM todos
        WHERE date = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Merge `patch` into a to-do in one statement. Returns None for an unknown id.
pub async fn update(
    pool: &Pool<Postgres>,
    id: Uuid,
    patch: &TodoPatch,
) -> Result<Option<Todo>, AppError> {
    let row = sqlx::query_as::<_, Todo>(
        r#"
        UPDATE todos
        SET text       = COALESCE($2, text),
            created_by = COALESCE($3, created_by),
            completed  = COALESCE($4, completed),
            date       = COALESCE($5, date)
        WHERE id = $1
        RETURNING id, text, created_by, created_at, completed, date
        "#,
    )
    .bind(id)
    .bind(patch.text.as_deref())
    .bind(patch.created_by.as_deref())
    .bind(patch.completed)
    .bind(patch.date)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Delete a to-do. Returns true if a row was actually deleted.
pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM todos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
