pub mod request {
    use crate::{
        modules::advertisement::repository::CreateAdvertisementPayload, utils::validation::Schema,
    };
    use serde::Deserialize;
    use serde_json::Value;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct CreateAds {
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

    impl Schema for CreateAds {
        const FIELDS: &'static [&'static str] = &["title", "description", "owner"];
        type Normalized = CreateAdvertisementPayload;

        fn normalize(self) -> Self::Normalized {
            CreateAdvertisementPayload {
                title: self.title.unwrap_or_default(),
                description: self.description.unwrap_or_default(),
                owner: self.owner.unwrap_or_default(),
            }
        }
    }

    pub struct Payload {
        pub body: Value,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{modules::advertisement::repository::Advertisement, utils::error::HttpError};

    pub enum Success {
        AdvertisementCreated(Advertisement),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertisementCreated(ad) => (
                    StatusCode::OK,
                    Json(json!({
                        "id": ad.id,
                        "title": ad.title,
                        "owner": ad.owner,
                        "description": ad.description,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, HttpError>;
}
