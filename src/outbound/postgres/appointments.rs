use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::rows::AppointmentRow;
use crate::domain::error::StoreError;
use crate::domain::models::{
    Appointment, AppointmentRecord, NewAppointment, PropertyRef, UserRef,
};

#[derive(FromRow)]
struct AppointmentRecordRow {
    id: i64,
    appointment_date: DateTime<Utc>,
    client_id: String,
    property_id: i64,
    ref_id: Option<String>,
    ref_name: Option<String>,
    ref_property_id: Option<i64>,
    ref_property_title: Option<String>,
}

impl From<AppointmentRecordRow> for AppointmentRecord {
    fn from(row: AppointmentRecordRow) -> Self {
        AppointmentRecord {
            appointment: Appointment {
                id: row.id,
                appointment_date: row.appointment_date,
                client_id: row.client_id,
                property_id: row.property_id,
            },
            client: match (row.ref_id, row.ref_name) {
                (Some(id), Some(name)) => Some(UserRef { id, name }),
                _ => None,
            },
            property: match (row.ref_property_id, row.ref_property_title) {
                (Some(id), Some(title)) => Some(PropertyRef { id, title }),
                _ => None,
            },
        }
    }
}

pub async fn list(pool: &PgPool) -> Result<Vec<AppointmentRecord>, StoreError> {
    let rows: Vec<AppointmentRecordRow> = sqlx::query_as(
        "SELECT a.id, a.appointment_date, a.client_id, a.property_id, \
         u.id AS ref_id, u.name AS ref_name, \
         p.id AS ref_property_id, p.title AS ref_property_title \
         FROM appointments a \
         LEFT JOIN users u ON u.id = a.client_id \
         LEFT JOIN properties p ON p.id = a.property_id \
         ORDER BY a.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Appointment>, StoreError> {
    let row: Option<AppointmentRow> = sqlx::query_as(
        "SELECT id, appointment_date, client_id, property_id FROM appointments WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

pub async fn create(pool: &PgPool, new: NewAppointment) -> Result<Appointment, StoreError> {
    let row: AppointmentRow = sqlx::query_as(
        "INSERT INTO appointments (appointment_date, client_id, property_id) \
         VALUES ($1, $2, $3) \
         RETURNING id, appointment_date, client_id, property_id",
    )
    .bind(new.appointment_date)
    .bind(&new.client_id)
    .bind(new.property_id)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    appointment_date: DateTime<Utc>,
) -> Result<Option<Appointment>, StoreError> {
    let row: Option<AppointmentRow> = sqlx::query_as(
        "UPDATE appointments SET appointment_date = $2 WHERE id = $1 \
         RETURNING id, appointment_date, client_id, property_id",
    )
    .bind(id)
    .bind(appointment_date)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
