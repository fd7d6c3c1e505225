use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::rows::InteractionRow;
use crate::domain::error::StoreError;
use crate::domain::models::{
    Interaction, InteractionRecord, InteractionUpdate, NewInteraction, UserRef,
};

#[derive(FromRow)]
struct InteractionRecordRow {
    id: i64,
    customer_id: String,
    property_id: i64,
    interaction_date: DateTime<Utc>,
    interaction_type: String,
    interaction_value: f64,
    ref_id: Option<String>,
    ref_name: Option<String>,
}

impl From<InteractionRecordRow> for InteractionRecord {
    fn from(row: InteractionRecordRow) -> Self {
        InteractionRecord {
            interaction: Interaction {
                id: row.id,
                customer_id: row.customer_id,
                property_id: row.property_id,
                interaction_date: row.interaction_date,
                interaction_type: row.interaction_type,
                interaction_value: row.interaction_value,
            },
            customer: match (row.ref_id, row.ref_name) {
                (Some(id), Some(name)) => Some(UserRef { id, name }),
                _ => None,
            },
        }
    }
}

const RECORD_SELECT: &str = "SELECT i.id, i.customer_id, i.property_id, i.interaction_date, \
     i.interaction_type, i.interaction_value, u.id AS ref_id, u.name AS ref_name \
     FROM interactions i LEFT JOIN users u ON u.id = i.customer_id";

pub async fn list(pool: &PgPool) -> Result<Vec<InteractionRecord>, StoreError> {
    let sql = format!("{RECORD_SELECT} ORDER BY i.id");
    let rows: Vec<InteractionRecordRow> = sqlx::query_as(&sql).fetch_all(pool).await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn list_for_property(
    pool: &PgPool,
    property_id: i64,
) -> Result<Vec<InteractionRecord>, StoreError> {
    let sql = format!("{RECORD_SELECT} WHERE i.property_id = $1 ORDER BY i.id");
    let rows: Vec<InteractionRecordRow> = sqlx::query_as(&sql)
        .bind(property_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Interaction>, StoreError> {
    let row: Option<InteractionRow> = sqlx::query_as(
        "SELECT id, customer_id, property_id, interaction_date, interaction_type, \
         interaction_value FROM interactions WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

pub async fn create(pool: &PgPool, new: NewInteraction) -> Result<Interaction, StoreError> {
    let row: InteractionRow = sqlx::query_as(
        "INSERT INTO interactions (customer_id, property_id, interaction_date, \
         interaction_type, interaction_value) VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, customer_id, property_id, interaction_date, interaction_type, \
         interaction_value",
    )
    .bind(&new.customer_id)
    .bind(new.property_id)
    .bind(new.interaction_date)
    .bind(&new.interaction_type)
    .bind(new.interaction_value)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    update: InteractionUpdate,
) -> Result<Option<()>, StoreError> {
    let result = sqlx::query(
        "UPDATE interactions SET interaction_type = $2, interaction_value = $3, \
         interaction_date = $4 WHERE id = $1",
    )
    .bind(id)
    .bind(&update.interaction_type)
    .bind(update.interaction_value)
    .bind(update.interaction_date)
    .execute(pool)
    .await?;

    Ok((result.rows_affected() > 0).then_some(()))
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM interactions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
