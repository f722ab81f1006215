pub mod request {
    use crate::{
        modules::advertisement::repository::UpdateAdvertisementPayload, utils::validation::Schema,
    };
    use serde::Deserialize;
    use serde_json::Value;
    use validator::Validate;

    /// PATCH replaces all three mutable fields, so each one is required.
    #[derive(Deserialize, Validate)]
    pub struct UpdateAds {
        #[validate(
            required(code = "value_error.missing", message = "field required"),
            length(
                min = 1,
                max = 50,
                code = "value_error.any_str.length",
                message = "inappropriate title length"
            )
        )]
        pub title: Option<String>,
        #[validate(required(code = "value_error.missing", message = "field required"))]
        pub description: Option<String>,
        #[validate(required(code = "value_error.missing", message = "field required"))]
        pub owner: Option<String>,
    }

    impl Schema for UpdateAds {
        const FIELDS: &'static [&'static str] = &["title", "description", "owner"];
        type Normalized = UpdateAdvertisementPayload;

        fn normalize(self) -> Self::Normalized {
            UpdateAdvertisementPayload {
                title: self.title.unwrap_or_default(),
                description: self.description.unwrap_or_default(),
                owner: self.owner.unwrap_or_default(),
            }
        }
    }

    pub struct Payload {
        pub id: i64,
        pub body: Value,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::utils::error::HttpError;

    pub enum Success {
        AdvertisementUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertisementUpdated => {
                    (StatusCode::OK, Json(json!({ "status": "success" }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, HttpError>;
}
