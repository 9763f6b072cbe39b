//! Adventure API routes
//!
//! Start adventures, submit choices, and read back played adventures.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::{AdventureStarted, ChoiceOutcome};
use crate::application::ports::outbound::AdventureRepositoryPort;
use crate::application::services::{
    AdventureGenerationService, ChoiceError, ChoiceResolutionService,
};
use crate::domain::entities::{Adventure, AdventureRoom, AdventureStatus};
use crate::domain::value_objects::{AdventureId, PlayerId};
use crate::infrastructure::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Optional player binding for a new adventure
#[derive(Debug, Deserialize)]
pub struct StartAdventureQuery {
    #[serde(default)]
    pub player_id: Option<Uuid>,
}

/// Request to submit the choice for the current room
#[derive(Debug, Deserialize)]
pub struct ChoiceRequest {
    pub choice: String,
}

#[derive(Debug, Serialize)]
pub struct AdventureResponse {
    pub id: String,
    pub player_id: Option<String>,
    pub status: AdventureStatus,
    pub total_score: i32,
    pub start_time: String,
    pub end_time: Option<String>,
    pub rooms: Vec<AdventureRoomResponse>,
}

#[derive(Debug, Serialize)]
pub struct AdventureRoomResponse {
    pub sequence_index: u32,
    pub room_title: String,
    pub room_type: String,
    pub description: String,
    pub choice: Option<String>,
    pub score_delta: i32,
}

impl From<Adventure> for AdventureResponse {
    fn from(adventure: Adventure) -> Self {
        Self {
            id: adventure.id.to_string(),
            player_id: adventure.player_id.map(|p| p.to_string()),
            status: adventure.status,
            total_score: adventure.total_score,
            start_time: adventure.start_time.to_rfc3339(),
            end_time: adventure.end_time.map(|t| t.to_rfc3339()),
            rooms: adventure.rooms.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<AdventureRoom> for AdventureRoomResponse {
    fn from(room: AdventureRoom) -> Self {
        Self {
            sequence_index: room.sequence_index,
            room_title: room.room_title,
            room_type: room.room_type.display_name().to_string(),
            description: room.description,
            choice: room.choice,
            score_delta: room.score_delta,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

type ApiError = (StatusCode, Json<serde_json::Value>);

/// Error responses carry a JSON body, not plain text
fn error_body(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(serde_json::json!({ "error": message.into() })))
}

/// Start a new adventure, optionally bound to a player
pub async fn start_adventure(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StartAdventureQuery>,
) -> Result<Json<AdventureStarted>, ApiError> {
    let player_id = query.player_id.map(PlayerId::from_uuid);

    let started = state
        .generation_service
        .start_adventure(player_id)
        .await
        .map_err(|e| error_body(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(started))
}

/// Submit the player's choice for the current room
pub async fn submit_choice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ChoiceRequest>,
) -> Result<Json<ChoiceOutcome>, ApiError> {
    let uuid = Uuid::parse_str(&id)
        .map_err(|_| error_body(StatusCode::BAD_REQUEST, "Invalid adventure ID"))?;

    let outcome = state
        .choice_service
        .submit_choice(AdventureId::from_uuid(uuid), &req.choice)
        .await
        .map_err(|e| match e {
            ChoiceError::NotFound => error_body(StatusCode::NOT_FOUND, e.to_string()),
            ChoiceError::AlreadyFinished | ChoiceError::NoRoomToPlay => {
                error_body(StatusCode::BAD_REQUEST, e.to_string())
            }
            ChoiceError::Storage(e) => {
                error_body(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        })?;

    Ok(Json(outcome))
}

/// Get a full adventure by ID
pub async fn get_adventure(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AdventureResponse>, ApiError> {
    let uuid = Uuid::parse_str(&id)
        .map_err(|_| error_body(StatusCode::BAD_REQUEST, "Invalid adventure ID"))?;

    let adventure = state
        .repository
        .get(AdventureId::from_uuid(uuid))
        .await
        .map_err(|e| error_body(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
        .ok_or_else(|| error_body(StatusCode::NOT_FOUND, "Adventure not found"))?;

    Ok(Json(AdventureResponse::from(adventure)))
}

/// List a player's adventures, most recently started first
pub async fn get_player_adventures(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<AdventureResponse>>, ApiError> {
    let uuid = Uuid::parse_str(&player_id)
        .map_err(|_| error_body(StatusCode::BAD_REQUEST, "Invalid player ID"))?;

    let adventures = state
        .repository
        .list_by_player(PlayerId::from_uuid(uuid))
        .await
        .map_err(|e| error_body(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(
        adventures.into_iter().map(AdventureResponse::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_responses_carry_a_json_body() {
        let (status, Json(body)) =
            error_body(StatusCode::BAD_REQUEST, "adventure already finished");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "error": "adventure already finished" })
        );
    }
}
