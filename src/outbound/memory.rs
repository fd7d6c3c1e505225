//! An in-memory record store. Backs the integration tests and local runs
//! without a database; behavior mirrors the Postgres adapter, including
//! cascading deletes and the unique favorite pair.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::error::StoreError;
use crate::domain::models::{
    Appointment, AppointmentRecord, Contract, ContractRecord, ContractUpdate, Favorite,
    FavoriteRecord, Interaction, InteractionRecord, InteractionUpdate, Location, NewAppointment,
    NewContract, NewInteraction, NewProperty, Property, PropertyImage, PropertyRecord,
    PropertyRef, PropertyUpdate, User, UserRecord, UserRef, UserUpdate,
};
use crate::domain::ports::RecordStore;

#[derive(Default)]
struct Inner {
    users: BTreeMap<String, User>,
    properties: BTreeMap<i64, Property>,
    locations: BTreeMap<i64, Location>,
    images: BTreeMap<i64, PropertyImage>,
    appointments: BTreeMap<i64, Appointment>,
    contracts: BTreeMap<i64, Contract>,
    favorites: BTreeMap<i64, Favorite>,
    interactions: BTreeMap<i64, Interaction>,
    next_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn user_ref(&self, id: &str) -> Option<UserRef> {
        self.users.get(id).map(|u| UserRef {
            id: u.id.clone(),
            name: u.name.clone(),
        })
    }

    fn property_ref(&self, id: i64) -> Option<PropertyRef> {
        self.properties.get(&id).map(|p| PropertyRef {
            id: p.id,
            title: p.title.clone(),
        })
    }

    fn property_record(&self, property: &Property) -> Result<PropertyRecord, StoreError> {
        let location = self
            .locations
            .values()
            .find(|l| l.property_id == property.id)
            .cloned()
            .ok_or_else(|| {
                StoreError::Other(anyhow::anyhow!("property {} has no location", property.id))
            })?;

        Ok(PropertyRecord {
            property: property.clone(),
            location,
            images: self
                .images
                .values()
                .filter(|i| i.property_id == property.id)
                .cloned()
                .collect(),
            appointments: self
                .appointments
                .values()
                .filter(|a| a.property_id == property.id)
                .cloned()
                .collect(),
            interactions: self
                .interactions
                .values()
                .filter(|i| i.property_id == property.id)
                .cloned()
                .collect(),
        })
    }

    fn city_of(&self, property_id: i64) -> Option<&str> {
        self.locations
            .values()
            .find(|l| l.property_id == property_id)
            .map(|l| l.city.as_str())
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn list_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner
            .users
            .values()
            .map(|user| user_record(&inner, user))
            .collect())
    }

    async fn get_user(&self, id: &str) -> Result<Option<UserRecord>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner.users.get(id).map(|user| user_record(&inner, user)))
    }

    async fn create_user(&self, user: User) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().await;

        inner.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: &str, update: UserUpdate) -> Result<Option<()>, StoreError> {
        let mut inner = self.inner.lock().await;

        let Some(user) = inner.users.get_mut(id) else {
            return Ok(None);
        };
        user.name = update.name;
        user.email = update.email;
        user.user_type = update.user_type;

        Ok(Some(()))
    }

    async fn delete_user(&self, id: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;

        Ok(inner.users.remove(id).is_some())
    }

    async fn list_properties(&self) -> Result<Vec<PropertyRecord>, StoreError> {
        let inner = self.inner.lock().await;

        inner
            .properties
            .values()
            .map(|p| inner.property_record(p))
            .collect()
    }

    async fn get_property(&self, id: i64) -> Result<Option<PropertyRecord>, StoreError> {
        let inner = self.inner.lock().await;

        inner
            .properties
            .get(&id)
            .map(|p| inner.property_record(p))
            .transpose()
    }

    async fn find_property(&self, id: i64) -> Result<Option<Property>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner.properties.get(&id).cloned())
    }

    async fn create_property(&self, new: NewProperty) -> Result<PropertyRecord, StoreError> {
        let mut inner = self.inner.lock().await;

        let property_id = inner.next_id();
        let location_id = inner.next_id();

        let property = Property {
            id: property_id,
            title: new.title,
            description: new.description,
            price: new.price,
            address: new.address,
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            area: new.area,
            created_date: Utc::now(),
            owner_id: new.owner_id,
        };
        let location = Location {
            id: location_id,
            address: new.location.address,
            city: new.location.city,
            latitude: new.location.latitude,
            longitude: new.location.longitude,
            property_id,
        };

        inner.properties.insert(property_id, property.clone());
        inner.locations.insert(location_id, location.clone());

        Ok(PropertyRecord {
            property,
            location,
            images: Vec::new(),
            appointments: Vec::new(),
            interactions: Vec::new(),
        })
    }

    async fn update_property(
        &self,
        id: i64,
        update: PropertyUpdate,
    ) -> Result<Option<()>, StoreError> {
        let mut inner = self.inner.lock().await;

        let Some(property) = inner.properties.get_mut(&id) else {
            return Ok(None);
        };
        property.title = update.title;
        property.description = update.description;
        property.price = update.price;
        property.address = update.address;
        property.bedrooms = update.bedrooms;
        property.bathrooms = update.bathrooms;
        property.area = update.area;

        Ok(Some(()))
    }

    async fn delete_property(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;

        if inner.properties.remove(&id).is_none() {
            return Ok(false);
        }

        inner.locations.retain(|_, l| l.property_id != id);
        inner.images.retain(|_, i| i.property_id != id);
        inner.appointments.retain(|_, a| a.property_id != id);
        inner.contracts.retain(|_, c| c.property_id != id);
        inner.favorites.retain(|_, f| f.property_id != id);
        inner.interactions.retain(|_, i| i.property_id != id);

        Ok(true)
    }

    async fn search_properties(&self, term: &str) -> Result<Vec<PropertyRecord>, StoreError> {
        let inner = self.inner.lock().await;

        inner
            .properties
            .values()
            .filter(|p| {
                p.title.contains(term)
                    || p.description.contains(term)
                    || inner
                        .city_of(p.id)
                        .is_some_and(|city| city.contains(term))
            })
            .map(|p| inner.property_record(p))
            .collect()
    }

    async fn add_property_image(
        &self,
        property_id: i64,
        image_url: String,
    ) -> Result<PropertyImage, StoreError> {
        let mut inner = self.inner.lock().await;

        let id = inner.next_id();
        let image = PropertyImage {
            id,
            property_id,
            image_url,
        };
        inner.images.insert(id, image.clone());

        Ok(image)
    }

    async fn update_property_image(
        &self,
        property_id: i64,
        image_id: i64,
        image_url: String,
    ) -> Result<Option<PropertyImage>, StoreError> {
        let mut inner = self.inner.lock().await;

        let Some(image) = inner
            .images
            .get_mut(&image_id)
            .filter(|i| i.property_id == property_id)
        else {
            return Ok(None);
        };
        image.image_url = image_url;

        Ok(Some(image.clone()))
    }

    async fn list_appointments(&self) -> Result<Vec<AppointmentRecord>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner
            .appointments
            .values()
            .map(|a| AppointmentRecord {
                appointment: a.clone(),
                client: inner.user_ref(&a.client_id),
                property: inner.property_ref(a.property_id),
            })
            .collect())
    }

    async fn find_appointment(&self, id: i64) -> Result<Option<Appointment>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner.appointments.get(&id).cloned())
    }

    async fn create_appointment(&self, new: NewAppointment) -> Result<Appointment, StoreError> {
        let mut inner = self.inner.lock().await;

        let id = inner.next_id();
        let appointment = Appointment {
            id,
            appointment_date: new.appointment_date,
            client_id: new.client_id,
            property_id: new.property_id,
        };
        inner.appointments.insert(id, appointment.clone());

        Ok(appointment)
    }

    async fn update_appointment(
        &self,
        id: i64,
        appointment_date: DateTime<Utc>,
    ) -> Result<Option<Appointment>, StoreError> {
        let mut inner = self.inner.lock().await;

        let Some(appointment) = inner.appointments.get_mut(&id) else {
            return Ok(None);
        };
        appointment.appointment_date = appointment_date;

        Ok(Some(appointment.clone()))
    }

    async fn delete_appointment(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;

        Ok(inner.appointments.remove(&id).is_some())
    }

    async fn list_contracts(&self) -> Result<Vec<ContractRecord>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner
            .contracts
            .values()
            .map(|c| contract_record(&inner, c))
            .collect())
    }

    async fn get_contract(&self, id: i64) -> Result<Option<ContractRecord>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner.contracts.get(&id).map(|c| contract_record(&inner, c)))
    }

    async fn find_contract(&self, id: i64) -> Result<Option<Contract>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner.contracts.get(&id).cloned())
    }

    async fn create_contract(&self, new: NewContract) -> Result<Contract, StoreError> {
        let mut inner = self.inner.lock().await;

        let id = inner.next_id();
        let contract = Contract {
            id,
            start_date: new.start_date,
            end_date: new.end_date,
            amount: new.amount,
            property_id: new.property_id,
            customer_id: new.customer_id,
            owner_id: new.owner_id,
        };
        inner.contracts.insert(id, contract.clone());

        Ok(contract)
    }

    async fn update_contract(
        &self,
        id: i64,
        update: ContractUpdate,
    ) -> Result<Option<()>, StoreError> {
        let mut inner = self.inner.lock().await;

        let Some(contract) = inner.contracts.get_mut(&id) else {
            return Ok(None);
        };
        contract.start_date = update.start_date;
        contract.end_date = update.end_date;
        contract.amount = update.amount;
        contract.property_id = update.property_id;
        contract.customer_id = update.customer_id;

        Ok(Some(()))
    }

    async fn delete_contract(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;

        Ok(inner.contracts.remove(&id).is_some())
    }

    async fn list_favorites(&self, client_id: &str) -> Result<Vec<FavoriteRecord>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner
            .favorites
            .values()
            .filter(|f| f.client_id == client_id)
            .map(|f| FavoriteRecord {
                favorite: f.clone(),
                property: inner.property_ref(f.property_id),
            })
            .collect())
    }

    async fn create_favorite(
        &self,
        client_id: &str,
        property_id: i64,
    ) -> Result<Favorite, StoreError> {
        let mut inner = self.inner.lock().await;

        if inner
            .favorites
            .values()
            .any(|f| f.client_id == client_id && f.property_id == property_id)
        {
            return Err(StoreError::Conflict);
        }

        let id = inner.next_id();
        let favorite = Favorite {
            id,
            client_id: client_id.to_string(),
            property_id,
        };
        inner.favorites.insert(id, favorite.clone());

        Ok(favorite)
    }

    async fn delete_favorite(
        &self,
        client_id: &str,
        property_id: i64,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;

        let before = inner.favorites.len();
        inner
            .favorites
            .retain(|_, f| !(f.client_id == client_id && f.property_id == property_id));

        Ok(inner.favorites.len() < before)
    }

    async fn list_interactions(&self) -> Result<Vec<InteractionRecord>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner
            .interactions
            .values()
            .map(|i| InteractionRecord {
                interaction: i.clone(),
                customer: inner.user_ref(&i.customer_id),
            })
            .collect())
    }

    async fn list_property_interactions(
        &self,
        property_id: i64,
    ) -> Result<Vec<InteractionRecord>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner
            .interactions
            .values()
            .filter(|i| i.property_id == property_id)
            .map(|i| InteractionRecord {
                interaction: i.clone(),
                customer: inner.user_ref(&i.customer_id),
            })
            .collect())
    }

    async fn find_interaction(&self, id: i64) -> Result<Option<Interaction>, StoreError> {
        let inner = self.inner.lock().await;

        Ok(inner.interactions.get(&id).cloned())
    }

    async fn create_interaction(&self, new: NewInteraction) -> Result<Interaction, StoreError> {
        let mut inner = self.inner.lock().await;

        let id = inner.next_id();
        let interaction = Interaction {
            id,
            customer_id: new.customer_id,
            property_id: new.property_id,
            interaction_date: new.interaction_date,
            interaction_type: new.interaction_type,
            interaction_value: new.interaction_value,
        };
        inner.interactions.insert(id, interaction.clone());

        Ok(interaction)
    }

    async fn update_interaction(
        &self,
        id: i64,
        update: InteractionUpdate,
    ) -> Result<Option<()>, StoreError> {
        let mut inner = self.inner.lock().await;

        let Some(interaction) = inner.interactions.get_mut(&id) else {
            return Ok(None);
        };
        interaction.interaction_type = update.interaction_type;
        interaction.interaction_value = update.interaction_value;
        interaction.interaction_date = update.interaction_date;

        Ok(Some(()))
    }

    async fn delete_interaction(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().await;

        Ok(inner.interactions.remove(&id).is_some())
    }
}

fn user_record(inner: &Inner, user: &User) -> UserRecord {
    UserRecord {
        user: user.clone(),
        properties: inner
            .properties
            .values()
            .filter(|p| p.owner_id == user.id)
            .map(|p| PropertyRef {
                id: p.id,
                title: p.title.clone(),
            })
            .collect(),
        appointments: inner
            .appointments
            .values()
            .filter(|a| a.client_id == user.id)
            .cloned()
            .collect(),
        interactions: inner
            .interactions
            .values()
            .filter(|i| i.customer_id == user.id)
            .cloned()
            .collect(),
    }
}

fn contract_record(inner: &Inner, contract: &Contract) -> ContractRecord {
    ContractRecord {
        contract: contract.clone(),
        property: inner.property_ref(contract.property_id),
        customer: inner.user_ref(&contract.customer_id),
        owner: inner.user_ref(&contract.owner_id),
    }
}
