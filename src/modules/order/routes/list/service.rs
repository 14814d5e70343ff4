use super::types::response;
use crate::modules::order::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let orders = repository::find_many(&ctx.orders).await;

    Ok(response::Success::Orders(orders))
}
