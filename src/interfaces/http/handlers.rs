use crate::application::{query, save};
use crate::domain::error::FaqError;
use crate::domain::model::{Faq, FaqItem, FaqUpdate, NewFaq};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

/// `?lang=` query parameter
#[derive(Debug, Default, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

/// Error body `{"message": ...}` with a status picked from the error kind
pub struct ApiError(FaqError);

impl From<FaqError> for ApiError {
    fn from(e: FaqError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            FaqError::Validation(_) => StatusCode::BAD_REQUEST,
            FaqError::NotFound(_) => StatusCode::NOT_FOUND,
            FaqError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            e if e.is_translation_failure() => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }
        message(status, &self.0.to_string())
    }
}

fn message(status: StatusCode, text: &str) -> Response {
    (status, Json(json!({ "message": text }))).into_response()
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_faqs(
    State(state): State<AppState>,
    Query(params): Query<LangQuery>,
) -> Result<Response, ApiError> {
    match query::list_faqs(&state, params.lang.as_deref()).await? {
        Some(items) => Ok((StatusCode::OK, Json(items)).into_response()),
        None => Ok(message(StatusCode::NOT_FOUND, "No FAQs found.")),
    }
}

pub async fn get_faq(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<LangQuery>,
) -> Result<Json<FaqItem>, ApiError> {
    query::get_faq(&state, id, params.lang.as_deref())
        .await?
        .map(Json)
        .ok_or(ApiError(FaqError::NotFound(id)))
}

pub async fn create_faq(
    State(state): State<AppState>,
    Json(draft): Json<NewFaq>,
) -> Result<(StatusCode, Json<Faq>), ApiError> {
    let faq = save::create_faq(&state, draft).await?;
    Ok((StatusCode::CREATED, Json(faq)))
}

pub async fn update_faq(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(changes): Json<FaqUpdate>,
) -> Result<Json<Faq>, ApiError> {
    Ok(Json(save::update_faq(&state, id, changes).await?))
}

pub async fn clear_cache(State(state): State<AppState>) -> Json<Value> {
    let cleared = query::clear_cache(&state);
    Json(json!({ "cleared": cleared }))
}
