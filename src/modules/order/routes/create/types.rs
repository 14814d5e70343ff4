pub mod request {
    use serde_json::Value;

    pub struct Payload {
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
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    (StatusCode::CREATED, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MissingData,
        MissingField(&'static str),
        NoDishes,
        InvalidQuantity(usize),
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
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
