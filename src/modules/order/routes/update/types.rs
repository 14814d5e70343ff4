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

    use crate::modules::order::repository::Order;
    use crate::modules::order::service::OrderBodyError;
    use crate::utils::validation;

    pub enum Success {
        OrderUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderUpdated(order) => {
                    (StatusCode::OK, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MissingData,
        MissingField(&'static str),
        NoDishes,
        InvalidQuantity(usize),
        OrderNotFound(String),
        IdMismatch { body_id: String, order_id: String },
        InvalidStatus,
    }

    impl From<OrderBodyError> for Error {
        fn from(err: OrderBodyError) -> Self {
            match err {
                OrderBodyError::MissingField(field) => Self::MissingField(field),
                OrderBodyError::NoDishes => Self::NoDishes,
                OrderBodyError::InvalidQuantity(index) => Self::InvalidQuantity(index),
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MissingData => validation::error_response(
                    StatusCode::BAD_REQUEST,
                    String::from("Request body must contain a data object."),
                ),
                Self::MissingField(field) => validation::error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Order must include a {}.", field),
                ),
                Self::NoDishes => validation::error_response(
                    StatusCode::BAD_REQUEST,
                    String::from("Order must include at least one dish."),
                ),
                Self::InvalidQuantity(index) => validation::error_response(
                    StatusCode::BAD_REQUEST,
                    format!(
                        "Dish {} must have a quantity that is a number greater than zero.",
                        index
                    ),
                ),
                Self::OrderNotFound(id) => validation::error_response(
                    StatusCode::NOT_FOUND,
                    format!("Order id not found: {}", id),
                ),
                Self::IdMismatch { body_id, order_id } => validation::error_response(
                    StatusCode::BAD_REQUEST,
                    format!(
                        "The id in the request body ({}) must match the orderId ({}) in the route.",
                        body_id, order_id
                    ),
                ),
                Self::InvalidStatus => validation::error_response(
                    StatusCode::BAD_REQUEST,
                    String::from(
                        "Order must have a status of pending, preparing, out-for-delivery, or delivered.",
                    ),
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
