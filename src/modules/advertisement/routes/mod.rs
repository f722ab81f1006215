mod create;
mod delete;
mod get;
mod update;

use super::repository::{self, Advertisement};
use crate::{
    types::Context,
    utils::{database::Session, error::HttpError},
};
use axum::routing::{self, Router};
use std::sync::Arc;

const NOT_FOUND: &str = "ad not found";

/// Absence is not a storage failure, so it is only turned into a 404 here.
async fn find_or_not_found(session: &mut Session, id: i64) -> Result<Advertisement, HttpError> {
    repository::find_by_id(&mut **session, id)
        .await?
        .ok_or_else(|| HttpError::not_found(NOT_FOUND))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/advertisement/", routing::post(create::handler))
        .route(
            "/advertisement/:id",
            routing::get(get::handler)
                .patch(update::handler)
                .delete(delete::handler),
        )
}
