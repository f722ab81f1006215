pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::utils::error::HttpError;

    pub enum Success {
        AdvertisementDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertisementDeleted => {
                    (StatusCode::OK, Json(json!({ "status": "success" }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, HttpError>;
}
