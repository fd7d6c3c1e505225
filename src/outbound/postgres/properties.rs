use std::collections::HashMap;

use sqlx::PgPool;

use super::rows::{AppointmentRow, ImageRow, InteractionRow, ListingRow, LocationRow, PropertyRow};
use crate::domain::error::StoreError;
use crate::domain::models::{
    Appointment, Interaction, NewProperty, Property, PropertyImage, PropertyRecord, PropertyUpdate,
};

const LISTING_SELECT: &str = "SELECT p.id, p.title, p.description, p.price, p.address, \
     p.bedrooms, p.bathrooms, p.area, p.created_date, p.owner_id, \
     l.id AS location_id, l.address AS location_address, l.city, l.latitude, l.longitude \
     FROM properties p JOIN locations l ON l.property_id = p.id";

pub async fn list(pool: &PgPool) -> Result<Vec<PropertyRecord>, StoreError> {
    let sql = format!("{LISTING_SELECT} ORDER BY p.id");
    let rows: Vec<ListingRow> = sqlx::query_as(&sql).fetch_all(pool).await?;
    assemble(pool, rows).await
}

pub async fn get(pool: &PgPool, id: i64) -> Result<Option<PropertyRecord>, StoreError> {
    let sql = format!("{LISTING_SELECT} WHERE p.id = $1");
    let row: Option<ListingRow> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;

    let Some(row) = row else {
        return Ok(None);
    };

    Ok(assemble(pool, vec![row]).await?.into_iter().next())
}

pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Property>, StoreError> {
    let row: Option<PropertyRow> = sqlx::query_as(
        "SELECT id, title, description, price, address, bedrooms, bathrooms, area, \
         created_date, owner_id FROM properties WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

/// The property and its location are written in one transaction so a failed
/// location insert never leaves a locationless listing behind.
pub async fn create(pool: &PgPool, new: NewProperty) -> Result<PropertyRecord, StoreError> {
    let mut tx = pool.begin().await?;

    let property: PropertyRow = sqlx::query_as(
        "INSERT INTO properties (title, description, price, address, bedrooms, bathrooms, \
         area, created_date, owner_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), $8) \
         RETURNING id, title, description, price, address, bedrooms, bathrooms, area, \
         created_date, owner_id",
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.price)
    .bind(&new.address)
    .bind(new.bedrooms)
    .bind(new.bathrooms)
    .bind(new.area)
    .bind(&new.owner_id)
    .fetch_one(&mut *tx)
    .await?;

    let location: LocationRow = sqlx::query_as(
        "INSERT INTO locations (address, city, latitude, longitude, property_id) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, address, city, latitude, longitude, property_id",
    )
    .bind(&new.location.address)
    .bind(&new.location.city)
    .bind(new.location.latitude)
    .bind(new.location.longitude)
    .bind(property.id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(PropertyRecord {
        property: property.into(),
        location: location.into(),
        images: Vec::new(),
        appointments: Vec::new(),
        interactions: Vec::new(),
    })
}

pub async fn update(
    pool: &PgPool,
    id: i64,
    update: PropertyUpdate,
) -> Result<Option<()>, StoreError> {
    let result = sqlx::query(
        "UPDATE properties SET title = $2, description = $3, price = $4, address = $5, \
         bedrooms = $6, bathrooms = $7, area = $8 WHERE id = $1",
    )
    .bind(id)
    .bind(&update.title)
    .bind(&update.description)
    .bind(&update.price)
    .bind(&update.address)
    .bind(update.bedrooms)
    .bind(update.bathrooms)
    .bind(update.area)
    .execute(pool)
    .await?;

    Ok((result.rows_affected() > 0).then_some(()))
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, StoreError> {
    let result = sqlx::query("DELETE FROM properties WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<PropertyRecord>, StoreError> {
    // LIKE is case sensitive; the escape keeps user input out of the pattern
    // syntax.
    let pattern = format!(
        "%{}%",
        term.replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_")
    );

    let sql = format!(
        "{LISTING_SELECT} WHERE p.title LIKE $1 OR p.description LIKE $1 OR l.city LIKE $1 \
         ORDER BY p.id"
    );
    let rows: Vec<ListingRow> = sqlx::query_as(&sql).bind(&pattern).fetch_all(pool).await?;

    assemble(pool, rows).await
}

pub async fn add_image(
    pool: &PgPool,
    property_id: i64,
    image_url: String,
) -> Result<PropertyImage, StoreError> {
    let row: ImageRow = sqlx::query_as(
        "INSERT INTO property_images (property_id, image_url) VALUES ($1, $2) \
         RETURNING id, property_id, image_url",
    )
    .bind(property_id)
    .bind(&image_url)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

pub async fn update_image(
    pool: &PgPool,
    property_id: i64,
    image_id: i64,
    image_url: String,
) -> Result<Option<PropertyImage>, StoreError> {
    let row: Option<ImageRow> = sqlx::query_as(
        "UPDATE property_images SET image_url = $3 WHERE id = $2 AND property_id = $1 \
         RETURNING id, property_id, image_url",
    )
    .bind(property_id)
    .bind(image_id)
    .bind(&image_url)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Into::into))
}

/// Loads the child collections for a page of listings in three grouped
/// queries rather than per-row round trips.
async fn assemble(
    pool: &PgPool,
    rows: Vec<ListingRow>,
) -> Result<Vec<PropertyRecord>, StoreError> {
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

    let image_rows: Vec<ImageRow> = sqlx::query_as(
        "SELECT id, property_id, image_url FROM property_images \
         WHERE property_id = ANY($1) ORDER BY id",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let appointment_rows: Vec<AppointmentRow> = sqlx::query_as(
        "SELECT id, appointment_date, client_id, property_id FROM appointments \
         WHERE property_id = ANY($1) ORDER BY id",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let interaction_rows: Vec<InteractionRow> = sqlx::query_as(
        "SELECT id, customer_id, property_id, interaction_date, interaction_type, \
         interaction_value FROM interactions WHERE property_id = ANY($1) ORDER BY id",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let mut images: HashMap<i64, Vec<PropertyImage>> = HashMap::new();
    for row in image_rows {
        images.entry(row.property_id).or_default().push(row.into());
    }

    let mut appointments: HashMap<i64, Vec<Appointment>> = HashMap::new();
    for row in appointment_rows {
        appointments
            .entry(row.property_id)
            .or_default()
            .push(row.into());
    }

    let mut interactions: HashMap<i64, Vec<Interaction>> = HashMap::new();
    for row in interaction_rows {
        interactions
            .entry(row.property_id)
            .or_default()
            .push(row.into());
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let (property, location) = row.split();
            let id = property.id;
            PropertyRecord {
                property,
                location,
                images: images.remove(&id).unwrap_or_default(),
                appointments: appointments.remove(&id).unwrap_or_default(),
                interactions: interactions.remove(&id).unwrap_or_default(),
            }
        })
        .collect())
}
