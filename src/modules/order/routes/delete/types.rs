pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::utils::validation;

    pub enum Success {
        OrderDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound(String),
        OrderNotPending,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound(id) => validation::error_response(
                    StatusCode::NOT_FOUND,
                    format!("Order id not found: {}", id),
                ),
                Self::OrderNotPending => validation::error_response(
                    StatusCode::BAD_REQUEST,
                    String::from("An order cannot be deleted unless it is pending."),
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
