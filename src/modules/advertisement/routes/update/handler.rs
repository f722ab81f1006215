use super::service::service;
use super::types::request;
use crate::{types::Context, utils::error::HttpError};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde_json::Value;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, HttpError>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, HttpError>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, body }).await
}
