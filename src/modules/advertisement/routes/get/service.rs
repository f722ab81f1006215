use super::types::{request, response};
use crate::{
    modules::advertisement::routes::find_or_not_found, types::Context, utils::database::Session,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut session = Session::begin(&ctx.db_conn).await?;
    let ad = find_or_not_found(&mut session, payload.id).await?;
    session.commit().await?;

    Ok(response::Success::Advertisement(ad))
}
