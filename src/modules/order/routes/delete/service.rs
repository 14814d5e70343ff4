use super::types::{request, response};
use crate::modules::order::repository;
use crate::types::Context;
use crate::utils::store::Removal;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    match repository::delete_pending_by_id(&ctx.orders, &payload.id).await {
        Removal::Removed(_) => Ok(response::Success::OrderDeleted),
        Removal::Refused => Err(response::Error::OrderNotPending),
        Removal::Missing => Err(response::Error::OrderNotFound(payload.id)),
    }
}
