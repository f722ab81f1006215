pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{modules::advertisement::repository::Advertisement, utils::error::HttpError};

    pub enum Success {
        Advertisement(Advertisement),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Advertisement(ad) => (StatusCode::OK, Json(json!(ad))).into_response(),
            }
        }
    }

    pub type Response = Result<Success, HttpError>;
}
