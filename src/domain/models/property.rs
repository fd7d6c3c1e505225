use super::{Appointment, Interaction};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A listed property. `owner_id` is set from the creating principal and is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
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

/// The 1:1 location of a property. Cascades with its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub property_id: i64,
}

/// An image attached to a property. `image_url` is an opaque blob reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    pub id: i64,
    pub property_id: i64,
    pub image_url: String,
}

/// A property with its relationships loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    #[serde(flatten)]
    pub property: Property,
    pub location: Location,
    pub images: Vec<PropertyImage>,
    pub appointments: Vec<Appointment>,
    pub interactions: Vec<Interaction>,
}

/// Location fields as supplied at property creation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    pub address: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A validated property creation, ready for the store.
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub address: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub owner_id: String,
    pub location: NewLocation,
}

/// Mutable scalar fields of a property. The owner and location are not
/// writable through update.
#[derive(Debug, Clone)]
pub struct PropertyUpdate {
    pub title: String,
    pub description: String,
    pub price: BigDecimal,
    pub address: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
}
