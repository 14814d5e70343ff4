use super::types::{request, response};
use crate::modules::order::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(&ctx.orders, &payload.id)
        .await
        .ok_or(response::Error::OrderNotFound(payload.id))
        .map(response::Success::Order)
}
