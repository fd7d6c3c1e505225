use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::rows::ContractRow;
use crate::domain::error::StoreError;
use crate::domain::models::{
    Contract, ContractRecord, ContractUpdate, NewContract, PropertyRef, UserRef,
};

#[derive(FromRow)]
struct ContractRecordRow {
    id: i64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    amount: BigDecimal,
    property_id: i64,
    customer_id: String,
    owner_id: String,
    ref_property_id: Option<i64>,
    ref_property_title: Option<String>,
    customer_ref_id: Option<String>,
    customer_ref_name: Option<String>,
    owner_ref_id: Option<String>,
    owner_ref_name: Option<String>,
}

impl From<ContractRecordRow> for ContractRecord {
    fn from(row: ContractRecordRow) -> Self {
        ContractRecord {
            contract: Contract {
                id: row.id,
                start_date: row.start_date,
                end_date: row.end_date,
                amount: row.amount,
                property_id: row.property_id,
                customer_id: row.customer_id,
                owner_id: row.owner_id,
            },
            property: match (row.ref_property_id, row.ref_property_title) {
                (Some(id), Some(title)) => Some(PropertyRef { id, title }),
                _ => None,
            },
            customer: match (row.customer_ref_id, row.customer_ref_name) {
                (Some(id), Some(name)) => Some(UserRef { id, name }),
                _ => None,
            },
            owner: match (row.owner_ref_id, row.owner_ref_name) {
                (Some(id), Some(name)) => Some(UserRef { id, name }),
                _ => None,
            },
        }
    }
}

const RECORD_SELECT: &str = "SELECT c.id, c.start_date, c.end_date, c.amount, c.property_id, \
     c.customer_id, c.owner_id, \
     p.id AS ref_property_id, p.title AS ref_property_title, \
     cu.id AS customer_ref_id, cu.name AS customer_ref_name, \
     ow.id AS owner_ref_id, ow.name AS owner_ref_name \
     FROM contracts c \
     LEFT JOIN properties p ON p.id = c.property_id \
     LEFT JOIN users cu ON cu.id = c.customer_id \
     LEFT JOIN users ow ON ow.id = c.owner_id";

pub async fn list(pool: &PgPool) -> Result<Vec<ContractRecord>, StoreError> {
    let sql = format!("{RECORD_SELECT} ORDER BY c.id");
    let rows: Vec<ContractRecordRow> = sqlx::query_as(&sql).fetch_all(pool).await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Option<ContractRecord>, StoreError> {
    let sql = format!("{RECORD_SELECT} WHERE c.id = $1");
    let row: Option<ContractRecordRow> =
        sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;

    Ok(row.map(Into::into))
}

pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Contract>, StoreError> {
    let row: Option<ContractRow> = sqlx::query_as(
        "SELECT id, start_date, end_date, amount, property_id, customer_id, owner_id \
         FROM contracts WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

pub async fn create(pool: &PgPool, new: NewContract) -> Result<Contract, StoreError> {
    let row: ContractRow = sqlx::query_as(
        "INSERT INTO contracts (start_date, end_date, amount, property_id, customer_id, owner_id) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING id, start_date, end_date, amount, property_id, customer_id, owner_id",
    )
    .bind(new.start_date)
    .bind(new.end_date)
    .bind(&new.amount)
    .bind(new.property_id)
    .bind(&new.customer_id)
    .bind(&new.owner_id)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    update: ContractUpdate,
) -> Result<Option<()>, StoreError> {
    let result = sqlx::query(
        "UPDATE contracts SET start_date = $2, end_date = $3, amount = $4, property_id = $5, \
         customer_id = $6 WHERE id = $1",
    )
    .bind(id)
    .bind(update.start_date)
    .bind(update.end_date)
    .bind(&update.amount)
    .bind(update.property_id)
    .bind(&update.customer_id)
    .execute(pool)
    .await?;

    Ok((result.rows_affected() > 0).then_some(()))
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM contracts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
