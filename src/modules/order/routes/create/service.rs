use super::types::{request, response};
use crate::modules::order::{repository, service::parse_order_body};
use crate::types::Context;
use crate::utils::validation;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let data = validation::data_object(&payload.body).ok_or(response::Error::MissingData)?;
    // any status in the body is dropped; orders start without one
    let body = parse_order_body(data)?;

    let order = repository::create(
        &ctx.orders,
        &ctx.ids,
        repository::CreateOrderPayload {
            deliver_to: body.deliver_to,
            mobile_number: body.mobile_number,
            dishes: body.dishes,
        },
    )
    .await;

    Ok(response::Success::OrderCreated(order))
}
