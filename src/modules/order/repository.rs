use crate::utils::id::IdGenerator;
use crate::utils::store::{Collection, Record, Removal};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "out-for-delivery")]
    OutForDelivery,
    #[serde(rename = "delivered")]
    Delivered,
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

/// One line of an order. Only the quantity is typed; the rest of the
/// dish is carried through as the client sent it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderDish {
    pub quantity: Number,
    #[serde(flatten)]
    pub dish: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Order {
    pub id: String,
    #[serde(rename = "deliverTo")]
    pub deliver_to: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
    // a freshly created order has no status until its first update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct CreateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
}

pub async fn create(
    store: &Collection<Order>,
    ids: &IdGenerator,
    payload: CreateOrderPayload,
) -> Order {
    let order = Order {
        id: ids.next_id().await,
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        dishes: payload.dishes,
        status: None,
    };

    store.insert(order).await
}

pub async fn find_by_id(store: &Collection<Order>, id: &str) -> Option<Order> {
    store.find_by_id(id).await
}

pub async fn find_many(store: &Collection<Order>) -> Vec<Order> {
    store.all().await
}

pub struct UpdateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
    pub status: OrderStatus,
}

pub async fn update_by_id(
    store: &Collection<Order>,
    id: &str,
    payload: UpdateOrderPayload,
) -> Option<Order> {
    let order = Order {
        id: id.to_string(),
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        dishes: payload.dishes,
        status: Some(payload.status),
    };

    store.replace_by_id(id, order).await
}

pub async fn delete_pending_by_id(store: &Collection<Order>, id: &str) -> Removal<Order> {
    // an order that was never moved to pending has no status at all;
    // the check and the removal share one write-lock acquisition
    store
        .remove_by_id_if(id, |order| order.status == Some(OrderStatus::Pending))
        .await
}
