pub mod request {
    use serde_json::Value;

    pub struct Payload {
        pub body: Value,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::dish::repository::Dish;
    use crate::utils::validation;

    pub enum Success {
        DishCreated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => {
                    (StatusCode::CREATED, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MissingData,
        MissingField(&'static str),
        InvalidPrice,
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
                    format!("You forgot the {} field.", field),
                ),
                Self::InvalidPrice => {
                    validation::error_response(StatusCode::BAD_REQUEST, String::from("price"))
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
