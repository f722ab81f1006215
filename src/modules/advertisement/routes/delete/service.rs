use super::types::{request, response};
use crate::{
    modules::advertisement::{repository, routes::find_or_not_found},
    types::Context,
    utils::database::Session,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut session = Session::begin_write(&ctx.db_conn).await?;
    let ad = find_or_not_found(&mut session, payload.id).await?;
    repository::delete_by_id(&mut *session, ad.id).await?;
    session.commit().await?;

    tracing::info!("Deleted advertisement {}", ad.id);

    Ok(response::Success::AdvertisementDeleted)
}
