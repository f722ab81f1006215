use super::types::{request, response};
use crate::{
    modules::advertisement::repository,
    types::Context,
    utils::{database::Session, error::HttpError, validation},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let fields =
        validation::validate::<request::CreateAds>(payload.body).map_err(HttpError::bad_request)?;

    let mut session = Session::begin_write(&ctx.db_conn).await?;
    let ad = repository::create(&mut *session, fields).await?;
    session.commit().await?;

    tracing::info!("Created advertisement {}", ad.id);

    Ok(response::Success::AdvertisementCreated(ad))
}
