use super::{service::service, types::request};
use crate::types::Context;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::Value;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    service(ctx, request::Payload { body }).await
}
