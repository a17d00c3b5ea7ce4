use shared_types::{AppError, DeadlineSetting};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// Read the singleton deadline row, if one has been written.
pub async fn find_deadline(pool: &Pool<Postgres>) -> Result<Option<DeadlineSetting>, AppError> {
    let row = sqlx::query_as::<_, DeadlineSetting>(
        "SELECT deadline, updated_at FROM metadata WHERE id = 1",
    )
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Create the deadline row on first write, overwrite it afterwards.
pub async fn upsert_deadline(pool: &Pool<Postgres>, deadline: &str) -> Result<DeadlineSetting, AppError> {
    let row = sqlx::query_as::<_, DeadlineSetting>(
        r#"
        INSERT INTO metadata (id, deadline)
        VALUES (1, $1)
        ON CONFLICT (id)
        DO UPDATE SET deadline = EXCLUDED.deadline, updated_at = NOW()
        RETURNING deadline, updated_at
        "#,
    )
    .bind(deadline)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}
