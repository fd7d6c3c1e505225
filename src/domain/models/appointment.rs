use super::{PropertyRef, UserRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client's scheduled visit to a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub appointment_date: DateTime<Utc>,
    pub client_id: String,
    pub property_id: i64,
}

/// An appointment with its client and property loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub client: Option<UserRef>,
    pub property: Option<PropertyRef>,
}

/// A new appointment, client already stamped from the principal.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub appointment_date: DateTime<Utc>,
    pub client_id: String,
    pub property_id: i64,
}
