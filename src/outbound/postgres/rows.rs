//! Row structs shared by the per-entity query modules. Columns map one-to-one
//! onto the domain models; joined read models alias colliding column names.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::error::StoreError;
use crate::domain::models::{
    Appointment, Contract, Favorite, Interaction, Location, Property, PropertyImage, User,
};

#[derive(FromRow)]
pub(crate) struct PropertyRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub address: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub created_date: DateTime<Utc>,
    pub owner_id: String,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Property {
            id: row.id,
            title: row.title,
            description: row.description,
            price: row.price,
            address: row.address,
            bedrooms: row.bedrooms,
            bathrooms: row.bathrooms,
            area: row.area,
            created_date: row.created_date,
            owner_id: row.owner_id,
        }
    }
}

#[derive(FromRow)]
pub(crate) struct LocationRow {
    pub id: i64,
    pub address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub property_id: i64,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            address: row.address,
            city: row.city,
            latitude: row.latitude,
            longitude: row.longitude,
            property_id: row.property_id,
        }
    }
}

/// A property joined with its location. Location columns are aliased to avoid
/// the `id`/`address` collisions.
#[derive(FromRow)]
pub(crate) struct ListingRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub address: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub created_date: DateTime<Utc>,
    pub owner_id: String,
    pub location_id: i64,
    pub location_address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ListingRow {
    pub(crate) fn split(self) -> (Property, Location) {
        let location = Location {
            id: self.location_id,
            address: self.location_address,
            city: self.city,
            latitude: self.latitude,
            longitude: self.longitude,
            property_id: self.id,
        };
        let property = Property {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            address: self.address,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            created_date: self.created_date,
            owner_id: self.owner_id,
        };
        (property, location)
    }
}

#[derive(FromRow)]
pub(crate) struct ImageRow {
    pub id: i64,
    pub property_id: i64,
    pub image_url: String,
}

impl From<ImageRow> for PropertyImage {
    fn from(row: ImageRow) -> Self {
        PropertyImage {
            id: row.id,
            property_id: row.property_id,
            image_url: row.image_url,
        }
    }
}

#[derive(FromRow)]
pub(crate) struct AppointmentRow {
    pub id: i64,
    pub appointment_date: DateTime<Utc>,
    pub client_id: String,
    pub property_id: i64,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Appointment {
            id: row.id,
            appointment_date: row.appointment_date,
            client_id: row.client_id,
            property_id: row.property_id,
        }
    }
}

#[derive(FromRow)]
pub(crate) struct ContractRow {
    pub id: i64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub amount: BigDecimal,
    pub property_id: i64,
    pub customer_id: String,
    pub owner_id: String,
}

impl From<ContractRow> for Contract {
    fn from(row: ContractRow) -> Self {
        Contract {
            id: row.id,
            start_date: row.start_date,
            end_date: row.end_date,
            amount: row.amount,
            property_id: row.property_id,
            customer_id: row.customer_id,
            owner_id: row.owner_id,
        }
    }
}

#[derive(FromRow)]
pub(crate) struct FavoriteRow {
    pub id: i64,
    pub client_id: String,
    pub property_id: i64,
}

impl From<FavoriteRow> for Favorite {
    fn from(row: FavoriteRow) -> Self {
        Favorite {
            id: row.id,
            client_id: row.client_id,
            property_id: row.property_id,
        }
    }
}

#[derive(FromRow)]
pub(crate) struct InteractionRow {
    pub id: i64,
    pub customer_id: String,
    pub property_id: i64,
    pub interaction_date: DateTime<Utc>,
    pub interaction_type: String,
    pub interaction_value: f64,
}

impl From<InteractionRow> for Interaction {
    fn from(row: InteractionRow) -> Self {
        Interaction {
            id: row.id,
            customer_id: row.customer_id,
            property_id: row.property_id,
            interaction_date: row.interaction_date,
            interaction_type: row.interaction_type,
            interaction_value: row.interaction_value,
        }
    }
}

#[derive(FromRow)]
pub(crate) struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub user_type: String,
}

impl UserRow {
    pub(crate) fn into_user(self) -> Result<User, StoreError> {
        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            user_type: self.user_type.parse().map_err(StoreError::Other)?,
        })
    }
}

