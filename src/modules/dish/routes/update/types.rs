pub mod request {
    use serde_json::Value;

    pub struct Payload {
        pub id: String,
        pub body: Value,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::dish::repository::Dish;
    use crate::utils::validation;

    pub enum Success {
        DishUpdated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishUpdated(dish) => {
                    (StatusCode::OK, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        DishNotFound(String),
        MissingData,
        MissingField(&'static str),
        InvalidPrice,
        IdMismatch { body_id: String, dish_id: String },
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishNotFound(id) => validation::error_response(
                    StatusCode::NOT_FOUND,
                    format!("No dish with id {}.", id),
                ),
                Self::MissingData => validation::error_response(
                    StatusCode::BAD_REQUEST,
                    String::from("Request body must contain a data object."),
                ),
                Self::MissingField(field) => validation::error_response(
                    StatusCode::BAD_REQUEST,
                    format!("You forgot the {} field.", field),
                ),
                Self::InvalidPrice => {
                    validation::error_response(StatusCode::BAD_REQUEST, String::from("price"))
                }
                Self::IdMismatch { body_id, dish_id } => validation::error_response(
                    StatusCode::BAD_REQUEST,
                    format!(
                        "The id in the request body ({}) must match the dishId ({}) in the route.",
                        body_id, dish_id
                    ),
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
