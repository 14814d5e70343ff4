use super::types::{request, response};
use crate::modules::dish::repository;
use crate::types::Context;
use crate::utils::validation;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(&ctx.dishes, &payload.id)
        .await
        .ok_or_else(|| response::Error::DishNotFound(payload.id.clone()))?;

    let data = validation::data_object(&payload.body).ok_or(response::Error::MissingData)?;

    let name = validation::non_empty_string(data, "name")
        .ok_or(response::Error::MissingField("name"))?;
    let description = validation::non_empty_string(data, "description")
        .ok_or(response::Error::MissingField("description"))?;
    if !validation::is_present(data, "price") {
        return Err(response::Error::MissingField("price"));
    }
    let image_url = validation::non_empty_string(data, "image_url")
        .ok_or(response::Error::MissingField("image_url"))?;
    let price =
        validation::positive_number(data, "price").ok_or(response::Error::InvalidPrice)?;

    if let Some(body_id) = data.get("id").filter(|id| validation::is_truthy(id)) {
        if body_id.as_str() != Some(payload.id.as_str()) {
            return Err(response::Error::IdMismatch {
                body_id: validation::id_for_message(body_id),
                dish_id: payload.id.clone(),
            });
        }
    }

    repository::update_by_id(
        &ctx.dishes,
        &payload.id,
        repository::UpdateDishPayload {
            name: name.to_string(),
            description: description.to_string(),
            price: price.clone(),
            image_url: image_url.to_string(),
        },
    )
    .await
    .ok_or(response::Error::DishNotFound(payload.id))
    .map(response::Success::DishUpdated)
}
