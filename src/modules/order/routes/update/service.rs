use super::types::{request, response};
use crate::modules::order::{repository, service::parse_order_body};
use crate::types::Context;
use crate::utils::validation;
use serde_json::Value;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    // the body is validated before the order is even looked up, so a
    // malformed body against an unknown id still comes back as a 400
    let data = validation::data_object(&payload.body).ok_or(response::Error::MissingData)?;
    let body = parse_order_body(data)?;

    repository::find_by_id(&ctx.orders, &payload.id)
        .await
        .ok_or_else(|| response::Error::OrderNotFound(payload.id.clone()))?;

    if let Some(body_id) = data.get("id").filter(|id| validation::is_truthy(id)) {
        if body_id.as_str() != Some(payload.id.as_str()) {
            return Err(response::Error::IdMismatch {
                body_id: validation::id_for_message(body_id),
                order_id: payload.id.clone(),
            });
        }
    }

    let status = data
        .get("status")
        .and_then(Value::as_str)
        .and_then(|status| status.parse::<repository::OrderStatus>().ok())
        .ok_or(response::Error::InvalidStatus)?;

    repository::update_by_id(
        &ctx.orders,
        &payload.id,
        repository::UpdateOrderPayload {
            deliver_to: body.deliver_to,
            mobile_number: body.mobile_number,
            dishes: body.dishes,
            status,
        },
    )
    .await
    .ok_or(response::Error::OrderNotFound(payload.id))
    .map(response::Success::OrderUpdated)
}
