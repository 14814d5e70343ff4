use super::types::{request, response};
use crate::modules::dish::repository;
use crate::types::Context;
use crate::utils::validation;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
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

    let dish = repository::create(
        &ctx.dishes,
        &ctx.ids,
        repository::CreateDishPayload {
            name: name.to_string(),
            description: description.to_string(),
            price: price.clone(),
            image_url: image_url.to_string(),
        },
    )
    .await;

    Ok(response::Success::DishCreated(dish))
}
