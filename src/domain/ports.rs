//! This module defines the ports the domain requires from the outside world:
//! the record store, the notifier, and the blob store. Adapters live under
//! [crate::outbound].

use crate::domain::error::StoreError;
use crate::domain::models::{
    Appointment, AppointmentRecord, Contract, ContractRecord, ContractUpdate, Favorite,
    FavoriteRecord, Interaction, InteractionRecord, InteractionUpdate, NewAppointment,
    NewContract, NewInteraction, NewProperty, Property, PropertyImage, PropertyRecord,
    PropertyUpdate, User, UserRecord, UserUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Typed CRUD with relationship loading and existence checks.
///
/// Update and delete methods report a row that no longer exists as
/// `Ok(None)` / `Ok(false)`; handlers map that to not-found. Every other
/// failure is a [StoreError].
#[async_trait]
pub trait RecordStore: Send + Sync {
    // users
    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError>;
    async fn get_user(&self, id: &str) -> Result<Option<UserRecord>, StoreError>;
    async fn create_user(&self, user: User) -> Result<User, StoreError>;
    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<Option<()>, StoreError>;
    async fn delete_user(&self, id: &str) -> Result<bool, StoreError>;

    // properties
    async fn list_properties(&self) -> Result<Vec<PropertyRecord>, StoreError>;
    async fn get_property(&self, id: i64) -> Result<Option<PropertyRecord>, StoreError>;
    /// Bare row, no relationships; used for existence and ownership checks.
    async fn find_property(&self, id: i64) -> Result<Option<Property>, StoreError>;
    async fn create_property(&self, new: NewProperty) -> Result<PropertyRecord, StoreError>;
    async fn update_property(
        &self,
        id: i64,
        update: PropertyUpdate,
    ) -> Result<Option<()>, StoreError>;
    async fn delete_property(&self, id: i64) -> Result<bool, StoreError>;
    /// Case-sensitive substring match across title, description and city.
    async fn search_properties(&self, term: &str) -> Result<Vec<PropertyRecord>, StoreError>;
    async fn add_property_image(
        &self,
        property_id: i64,
        image_url: String,
    ) -> Result<PropertyImage, StoreError>;
    async fn update_property_image(
        &self,
        property_id: i64,
        image_id: i64,
        image_url: String,
    ) -> Result<Option<PropertyImage>, StoreError>;

    // appointments
    async fn list_appointments(&self) -> Result<Vec<AppointmentRecord>, StoreError>;
    async fn find_appointment(&self, id: i64) -> Result<Option<Appointment>, StoreError>;
    async fn create_appointment(&self, new: NewAppointment) -> Result<Appointment, StoreError>;
    async fn update_appointment(
        &self,
        id: i64,
        appointment_date: DateTime<Utc>,
    ) -> Result<Option<Appointment>, StoreError>;
    async fn delete_appointment(&self, id: i64) -> Result<bool, StoreError>;

    // contracts
    async fn list_contracts(&self) -> Result<Vec<ContractRecord>, StoreError>;
    async fn get_contract(&self, id: i64) -> Result<Option<ContractRecord>, StoreError>;
    async fn find_contract(&self, id: i64) -> Result<Option<Contract>, StoreError>;
    async fn create_contract(&self, new: NewContract) -> Result<Contract, StoreError>;
    async fn update_contract(
        &self,
        id: i64,
        update: ContractUpdate,
    ) -> Result<Option<()>, StoreError>;
    async fn delete_contract(&self, id: i64) -> Result<bool, StoreError>;

    // favorites
    async fn list_favorites(&self, client_id: &str) -> Result<Vec<FavoriteRecord>, StoreError>;
    /// Fails with [StoreError::Conflict] when the pair already exists.
    async fn create_favorite(
        &self,
        client_id: &str,
        property_id: i64,
    ) -> Result<Favorite, StoreError>;
    async fn delete_favorite(&self, client_id: &str, property_id: i64)
        -> Result<bool, StoreError>;

    // interactions
    async fn list_interactions(&self) -> Result<Vec<InteractionRecord>, StoreError>;
    async fn list_property_interactions(
        &self,
        property_id: i64,
    ) -> Result<Vec<InteractionRecord>, StoreError>;
    async fn find_interaction(&self, id: i64) -> Result<Option<Interaction>, StoreError>;
    async fn create_interaction(&self, new: NewInteraction) -> Result<Interaction, StoreError>;
    async fn update_interaction(
        &self,
        id: i64,
        update: InteractionUpdate,
    ) -> Result<Option<()>, StoreError>;
    async fn delete_interaction(&self, id: i64) -> Result<bool, StoreError>;
}

/// Best-effort outbound notification. Never fails the caller: implementations
/// log delivery problems and report them through the returned flag.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, to: &str, subject: &str, body: &str) -> bool;
}

/// Opaque storage for uploaded image bytes. Returns the public URL of the
/// stored blob.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn store(&self, bytes: Vec<u8>) -> anyhow::Result<String>;
}
