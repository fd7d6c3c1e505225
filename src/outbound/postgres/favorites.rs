use sqlx::{FromRow, PgPool};

use super::rows::FavoriteRow;
use crate::domain::error::StoreError;
use crate::domain::models::{Favorite, FavoriteRecord, PropertyRef};

#[derive(FromRow)]
struct FavoriteRecordRow {
    id: i64,
    client_id: String,
    property_id: i64,
    ref_property_id: Option<i64>,
    ref_property_title: Option<String>,
}

impl From<FavoriteRecordRow> for FavoriteRecord {
    fn from(row: FavoriteRecordRow) -> Self {
        FavoriteRecord {
            favorite: Favorite {
                id: row.id,
                client_id: row.client_id,
                property_id: row.property_id,
            },
            property: match (row.ref_property_id, row.ref_property_title) {
                (Some(id), Some(title)) => Some(PropertyRef { id, title }),
                _ => None,
            },
        }
    }
}

pub async fn list(pool: &PgPool, client_id: &str) -> Result<Vec<FavoriteRecord>, StoreError> {
    let rows: Vec<FavoriteRecordRow> = sqlx::query_as(
        "SELECT f.id, f.client_id, f.property_id, \
         p.id AS ref_property_id, p.title AS ref_property_title \
         FROM favorites f \
         LEFT JOIN properties p ON p.id = f.property_id \
         WHERE f.client_id = $1 ORDER BY f.id",
    )
    .bind(client_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// The `(client_id, property_id)` pair is unique; a second insert surfaces as
/// [StoreError::Conflict].
pub async fn create(
    pool: &PgPool,
    client_id: &str,
    property_id: i64,
) -> Result<Favorite, StoreError> {
    let result: Result<FavoriteRow, sqlx::Error> = sqlx::query_as(
        "INSERT INTO favorites (client_id, property_id) VALUES ($1, $2) \
         RETURNING id, client_id, property_id",
    )
    .bind(client_id)
    .bind(property_id)
    .fetch_one(pool)
    .await;

    match result {
        Ok(row) => Ok(row.into()),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(StoreError::Conflict),
        Err(err) => Err(err.into()),
    }
}

pub async fn delete(pool: &PgPool, client_id: &str, property_id: i64) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM favorites WHERE client_id = $1 AND property_id = $2")
        .bind(client_id)
        .bind(property_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
