use crate::utils::id::IdGenerator;
use crate::utils::store::{Collection, Record};
use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    // kept as a raw JSON number so a dish created with price 12 is not
    // echoed back as 12.0
    pub price: Number,
    pub image_url: String,
}

impl Record for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct CreateDishPayload {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

pub async fn create(
    store: &Collection<Dish>,
    ids: &IdGenerator,
    payload: CreateDishPayload,
) -> Dish {
    let dish = Dish {
        id: ids.next_id().await,
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
    };

    store.insert(dish).await
}

pub async fn find_by_id(store: &Collection<Dish>, id: &str) -> Option<Dish> {
    store.find_by_id(id).await
}

pub async fn find_many(store: &Collection<Dish>) -> Vec<Dish> {
    store.all().await
}

pub struct UpdateDishPayload {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

pub async fn update_by_id(
    store: &Collection<Dish>,
    id: &str,
    payload: UpdateDishPayload,
) -> Option<Dish> {
    let dish = Dish {
        id: id.to_string(),
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
    };

    store.replace_by_id(id, dish).await
}
