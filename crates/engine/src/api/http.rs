//! HTTP routes.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use anycraft_domain::{ChallengeCandidate, DomainError, Element, ElementId, GameCode};
use anycraft_shared::{
    BaseElementsQuery, BaseElementsResponse, ChallengeItemData, ChallengesRequest,
    ChallengesResponse, CombineRequest, CombineResponse, ElementData,
};

use crate::app::App;
use crate::use_cases::compose::{CombineOutcome, ComposeError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/v1/compose/base-elements", get(base_elements))
        .route("/api/v1/compose/combine", post(combine))
        .route("/api/v1/compose/challenges", post(challenges))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Compose
// =============================================================================

async fn base_elements(
    State(app): State<Arc<App>>,
    query: Result<Query<BaseElementsQuery>, QueryRejection>,
) -> Result<(StatusCode, Json<BaseElementsResponse>), ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let game = GameCode::new(query.game_code.unwrap_or_default())?;

    let response = match app.use_cases.compose.base_elements.execute(&game).await {
        Ok(elements) => (
            StatusCode::OK,
            Json(BaseElementsResponse::items(
                elements.iter().map(element_to_data).collect(),
            )),
        ),
        Err(e) => {
            log_unavailable("base_elements", &game, &e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(BaseElementsResponse::unavailable()),
            )
        }
    };
    Ok(response)
}

async fn combine(
    State(app): State<Arc<App>>,
    body: Bytes,
) -> Result<(StatusCode, Json<CombineResponse>), ApiError> {
    let request: CombineRequest = decode_json(&body)?;
    let game = GameCode::new(request.game_code)?;

    let outcome = app
        .use_cases
        .compose
        .combine
        .execute(
            &game,
            ElementId::new(request.parent_a_id),
            ElementId::new(request.parent_b_id),
        )
        .await;

    let response = match outcome {
        Ok(CombineOutcome::Created(element)) => (
            StatusCode::OK,
            Json(CombineResponse::found(element_to_data(&element))),
        ),
        Ok(CombineOutcome::NoRecipe) => (StatusCode::OK, Json(CombineResponse::no_recipe())),
        Err(e) => {
            log_unavailable("combine", &game, &e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(CombineResponse::unavailable()),
            )
        }
    };
    Ok(response)
}

async fn challenges(
    State(app): State<Arc<App>>,
    body: Bytes,
) -> Result<(StatusCode, Json<ChallengesResponse>), ApiError> {
    let request: ChallengesRequest = decode_json(&body)?;
    let game = GameCode::new(request.game_code)?;
    let discovered: Vec<ElementId> = request
        .discovered_character_ids
        .into_iter()
        .map(ElementId::new)
        .collect();

    let response = match app
        .use_cases
        .compose
        .challenges
        .execute(&game, &discovered)
        .await
    {
        Ok(picked) => (
            StatusCode::OK,
            Json(ChallengesResponse::items(
                picked.iter().map(candidate_to_data).collect(),
            )),
        ),
        Err(e) => {
            log_unavailable("challenges", &game, &e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ChallengesResponse::unavailable()),
            )
        }
    };
    Ok(response)
}

/// Decode a JSON body regardless of the declared content type.
fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting request body");
        ApiError::BadRequest("invalid json".to_string())
    })
}

fn log_unavailable(operation: &'static str, game: &GameCode, error: &ComposeError) {
    tracing::error!(operation, game = %game, error = %error, "Element store unavailable");
}

// =============================================================================
// Domain -> wire conversions
// =============================================================================

fn element_to_data(element: &Element) -> ElementData {
    ElementData {
        id: element.id.get(),
        slug: element.slug.clone(),
        name: element.name.clone(),
        emoji: element.emoji.clone(),
        is_character: element.is_character,
        is_base_element: element.is_base_element,
        image_url: element.image_url.clone(),
        rarity: element.rarity.clone(),
        difficulty: element.difficulty,
    }
}

fn candidate_to_data(candidate: &ChallengeCandidate) -> ChallengeItemData {
    ChallengeItemData {
        id: candidate.id.get(),
        name: candidate.name.clone(),
        image_url: candidate.image_url.clone(),
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Client errors, answered in plain text.
///
/// Store outages are not here: they keep the endpoint's JSON shape.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(msg) => ApiError::BadRequest(msg),
        }
    }
}
