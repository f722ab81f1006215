use super::types::{request, response};
use crate::{
    modules::advertisement::{repository, routes::find_or_not_found},
    types::Context,
    utils::{database::Session, error::HttpError, validation},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    // Validation runs before a session is opened so a bad body never touches the store.
    let fields =
        validation::validate::<request::UpdateAds>(payload.body).map_err(HttpError::bad_request)?;

    let mut session = Session::begin_write(&ctx.db_conn).await?;
    let ad = find_or_not_found(&mut session, payload.id).await?;
    repository::update_by_id(&mut *session, ad.id, fields).await?;
    session.commit().await?;

    tracing::info!("Updated advertisement {}", ad.id);

    Ok(response::Success::AdvertisementUpdated)
}
