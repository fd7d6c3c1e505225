//! PostgreSQL implementation of the record store port. Maps SQL rows directly
//! onto the domain models; each entity's queries live in their own module.

mod appointments;
mod contracts;
mod favorites;
mod interactions;
mod properties;
mod rows;
mod users;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::error::StoreError;
use crate::domain::models::{
    Appointment, AppointmentRecord, Contract, ContractRecord, ContractUpdate, Favorite,
    FavoriteRecord, Interaction, InteractionRecord, InteractionUpdate, NewAppointment,
    NewContract, NewInteraction, NewProperty, Property, PropertyImage, PropertyRecord,
    PropertyUpdate, User, UserRecord, UserUpdate,
};
use crate::domain::ports::RecordStore;

#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        users::list(&self.pool).await
    }

    async fn get_user(&self, id: &str) -> Result<Option<UserRecord>, StoreError> {
        users::get(&self.pool, id).await
    }

    async fn create_user(&self, user: User) -> Result<User, StoreError> {
        users::create(&self.pool, user).await
    }

    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<Option<()>, StoreError> {
        users::update(&self.pool, id, update).await
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StoreError> {
        users::delete(&self.pool, id).await
    }

    async fn list_properties(&self) -> Result<Vec<PropertyRecord>, StoreError> {
        properties::list(&self.pool).await
    }

    async fn get_property(&self, id: i64) -> Result<Option<PropertyRecord>, StoreError> {
        properties::get(&self.pool, id).await
    }

    async fn find_property(&self, id: i64) -> Result<Option<Property>, StoreError> {
        properties::find(&self.pool, id).await
    }

    async fn create_property(&self, new: NewProperty) -> Result<PropertyRecord, StoreError> {
        properties::create(&self.pool, new).await
    }

    async fn update_property(
        &self,
        id: i64,
        update: PropertyUpdate,
    ) -> Result<Option<()>, StoreError> {
        properties::update(&self.pool, id, update).await
    }

    async fn delete_property(&self, id: i64) -> Result<bool, StoreError> {
        properties::delete(&self.pool, id).await
    }

    async fn search_properties(&self, term: &str) -> Result<Vec<PropertyRecord>, StoreError> {
        properties::search(&self.pool, term).await
    }

    async fn add_property_image(
        &self,
        property_id: i64,
        image_url: String,
    ) -> Result<PropertyImage, StoreError> {
        properties::add_image(&self.pool, property_id, image_url).await
    }

    async fn update_property_image(
        &self,
        property_id: i64,
        image_id: i64,
        image_url: String,
    ) -> Result<Option<PropertyImage>, StoreError> {
        properties::update_image(&self.pool, property_id, image_id, image_url).await
    }

    async fn list_appointments(&self) -> Result<Vec<AppointmentRecord>, StoreError> {
        appointments::list(&self.pool).await
    }

    async fn find_appointment(&self, id: i64) -> Result<Option<Appointment>, StoreError> {
        appointments::find(&self.pool, id).await
    }

    async fn create_appointment(&self, new: NewAppointment) -> Result<Appointment, StoreError> {
        appointments::create(&self.pool, new).await
    }

    async fn update_appointment(
        &self,
        id: i64,
        appointment_date: DateTime<Utc>,
    ) -> Result<Option<Appointment>, StoreError> {
        appointments::update(&self.pool, id, appointment_date).await
    }

    async fn delete_appointment(&self, id: i64) -> Result<bool, StoreError> {
        appointments::delete(&self.pool, id).await
    }

    async fn list_contracts(&self) -> Result<Vec<ContractRecord>, StoreError> {
        contracts::list(&self.pool).await
    }

    async fn get_contract(&self, id: i64) -> Result<Option<ContractRecord>, StoreError> {
        contracts::get(&self.pool, id).await
    }

    async fn find_contract(&self, id: i64) -> Result<Option<Contract>, StoreError> {
        contracts::find(&self.pool, id).await
    }

    async fn create_contract(&self, new: NewContract) -> Result<Contract, StoreError> {
        contracts::create(&self.pool, new).await
    }

    async fn update_contract(
        &self,
        id: i64,
        update: ContractUpdate,
    ) -> Result<Option<()>, StoreError> {
        contracts::update(&self.pool, id, update).await
    }

    async fn delete_contract(&self, id: i64) -> Result<bool, StoreError> {
        contracts::delete(&self.pool, id).await
    }

    async fn list_favorites(&self, client_id: &str) -> Result<Vec<FavoriteRecord>, StoreError> {
        favorites::list(&self.pool, client_id).await
    }

    async fn create_favorite(
        &self,
        client_id: &str,
        property_id: i64,
    ) -> Result<Favorite, StoreError> {
        favorites::create(&self.pool, client_id, property_id).await
    }

    async fn delete_favorite(
        &self,
        client_id: &str,
        property_id: i64,
    ) -> Result<bool, StoreError> {
        favorites::delete(&self.pool, client_id, property_id).await
    }

    async fn list_interactions(&self) -> Result<Vec<InteractionRecord>, StoreError> {
        interactions::list(&self.pool).await
    }

    async fn list_property_interactions(
        &self,
        property_id: i64,
    ) -> Result<Vec<InteractionRecord>, StoreError> {
        interactions::list_for_property(&self.pool, property_id).await
    }

    async fn find_interaction(&self, id: i64) -> Result<Option<Interaction>, StoreError> {
        interactions::find(&self.pool, id).await
    }

    async fn create_interaction(&self, new: NewInteraction) -> Result<Interaction, StoreError> {
        interactions::create(&self.pool, new).await
    }

    async fn update_interaction(
        &self,
        id: i64,
        update: InteractionUpdate,
    ) -> Result<Option<()>, StoreError> {
        interactions::update(&self.pool, id, update).await
    }

    async fn delete_interaction(&self, id: i64) -> Result<bool, StoreError> {
        interactions::delete(&self.pool, id).await
    }
}
