use std::collections::HashMap;

use sqlx::{FromRow, PgPool};

use super::rows::{AppointmentRow, InteractionRow, UserRow};
use crate::domain::error::StoreError;
use crate::domain::models::{
    Appointment, Interaction, PropertyRef, User, UserRecord, UserUpdate,
};

#[derive(FromRow)]
struct OwnedPropertyRow {
    id: i64,
    title: String,
    owner_id: String,
}

pub async fn list(pool: &PgPool) -> Result<Vec<UserRecord>, StoreError> {
    let rows: Vec<UserRow> = sqlx::query_as("SELECT id, name, email, user_type FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    let ids: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
    let mut back_refs = load_back_references(pool, &ids).await?;

    rows.into_iter()
        .map(|row| {
            let user = row.into_user()?;
            Ok(back_refs.assemble(user))
        })
        .collect()
}

pub async fn get(pool: &PgPool, id: &str) -> Result<Option<UserRecord>, StoreError> {
    let row: Option<UserRow> =
        sqlx::query_as("SELECT id, name, email, user_type FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let user = row.into_user()?;
    let mut back_refs = load_back_references(pool, std::slice::from_ref(&user.id)).await?;

    Ok(Some(back_refs.assemble(user)))
}

pub async fn create(pool: &PgPool, user: User) -> Result<User, StoreError> {
    let row: UserRow = sqlx::query_as(
        "INSERT INTO users (id, name, email, user_type) VALUES ($1, $2, $3, $4) \
         RETURNING id, name, email, user_type",
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(user.user_type.as_str())
    .fetch_one(pool)
    .await?;

    row.into_user()
}

pub async fn update(pool: &PgPool, id: &str, update: UserUpdate) -> Result<Option<()>, StoreError> {
    let result = sqlx::query("UPDATE users SET name = $2, email = $3, user_type = $4 WHERE id = $1")
        .bind(id)
        .bind(&update.name)
        .bind(&update.email)
        .bind(update.user_type.as_str())
        .execute(pool)
        .await?;

    Ok((result.rows_affected() > 0).then_some(()))
}

pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

struct BackReferences {
    properties: HashMap<String, Vec<PropertyRef>>,
    appointments: HashMap<String, Vec<Appointment>>,
    interactions: HashMap<String, Vec<Interaction>>,
}

impl BackReferences {
    fn assemble(&mut self, user: User) -> UserRecord {
        let id = user.id.clone();
        UserRecord {
            user,
            properties: self.properties.remove(&id).unwrap_or_default(),
            appointments: self.appointments.remove(&id).unwrap_or_default(),
            interactions: self.interactions.remove(&id).unwrap_or_default(),
        }
    }
}

async fn load_back_references(
    pool: &PgPool,
    user_ids: &[String],
) -> Result<BackReferences, StoreError> {
    let property_rows: Vec<OwnedPropertyRow> = sqlx::query_as(
        "SELECT id, title, owner_id FROM properties WHERE owner_id = ANY($1) ORDER BY id",
    )
    .bind(user_ids)
    .fetch_all(pool)
    .await?;

    let appointment_rows: Vec<AppointmentRow> = sqlx::query_as(
        "SELECT id, appointment_date, client_id, property_id FROM appointments \
         WHERE client_id = ANY($1) ORDER BY id",
    )
    .bind(user_ids)
    .fetch_all(pool)
    .await?;

    let interaction_rows: Vec<InteractionRow> = sqlx::query_as(
        "SELECT id, customer_id, property_id, interaction_date, interaction_type, \
         interaction_value FROM interactions WHERE customer_id = ANY($1) ORDER BY id",
    )
    .bind(user_ids)
    .fetch_all(pool)
    .await?;

    let mut properties: HashMap<String, Vec<PropertyRef>> = HashMap::new();
    for row in property_rows {
        properties.entry(row.owner_id).or_default().push(PropertyRef {
            id: row.id,
            title: row.title,
        });
    }

    let mut appointments: HashMap<String, Vec<Appointment>> = HashMap::new();
    for row in appointment_rows {
        appointments
            .entry(row.client_id.clone())
            .or_default()
            .push(row.into());
    }

    let mut interactions: HashMap<String, Vec<Interaction>> = HashMap::new();
    for row in interaction_rows {
        interactions
            .entry(row.customer_id.clone())
            .or_default()
            .push(row.into());
    }

    Ok(BackReferences {
        properties,
        appointments,
        interactions,
    })
}
