use crate::core::engine::TransferEngine;
use crate::core::selector::TransferSelector;
use crate::core::{Budget, Chooser, PlayerDirectory, PlayerId, SquadSource, TeamId};
use crate::utils::error::{Result, TransferError};
use crate::utils::validation::{validate_non_empty_string, validate_required_field};
use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const INVALID_PARAMETERS: &str = "Invalid parameters";
pub const INVALID_TEAM_ID: &str = "Invalid team id number";

/// What an HTTP layer would send back: status, content type and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl ApiResponse {
    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status: 200,
                content_type: CONTENT_TYPE_JSON,
                body,
            },
            Err(e) => Self::from_error(&TransferError::Serialization(e)),
        }
    }

    fn error(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: CONTENT_TYPE_JSON,
            body: body.into(),
        }
    }

    pub fn from_error(err: &TransferError) -> Self {
        let status = match err {
            TransferError::InvalidInput { .. } | TransferError::InvalidTeamId { .. } => 400,
            TransferError::UnresolvedPlayer { .. } | TransferError::UnresolvedClub { .. } => 404,
            TransferError::FetchFailed { .. } | TransferError::Http(_) => 502,
            _ => 500,
        };

        if status >= 500 {
            tracing::error!("Request failed: {} (Category: {:?})", err, err.category());
        } else {
            tracing::warn!("Request rejected: {}", err);
        }
        Self::error(status, err.user_friendly_message())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parses the raw `squad` (JSON array of ids) and `cash` parameters.
pub fn parse_transfer_params(
    squad: Option<&str>,
    cash: Option<&str>,
) -> Result<(Vec<PlayerId>, Budget)> {
    let squad = validate_required_field("squad", &squad)?;
    validate_non_empty_string("squad", squad)?;
    let ids: Vec<PlayerId> =
        serde_json::from_str(squad).map_err(|e| TransferError::InvalidInput {
            field: "squad".to_string(),
            reason: format!("expected a JSON array of player ids: {}", e),
        })?;

    let cash = validate_required_field("cash", &cash)?;
    let budget = cash.parse::<Budget>()?;

    Ok((ids, budget))
}

/// `GET /transfers?squad=[..]&cash=..`
///
/// 200 with `{"out":..,"in":..}`, or `null` when no legal transfer exists.
pub fn transfers<D, C>(
    selector: &TransferSelector<'_, D>,
    squad: Option<&str>,
    cash: Option<&str>,
    chooser: &mut C,
) -> ApiResponse
where
    D: PlayerDirectory + ?Sized,
    C: Chooser,
{
    let (ids, budget) = match parse_transfer_params(squad, cash) {
        Ok(parsed) => parsed,
        Err(e) => return ApiResponse::from_error(&e),
    };

    match selector.suggest_transfer(&ids, budget.amount(), chooser) {
        Ok(recommendation) => ApiResponse::json(&recommendation),
        Err(e) => ApiResponse::from_error(&e),
    }
}

/// `GET /getsquad?fplid=..`
pub async fn get_squad<D, S>(engine: &TransferEngine<D, S>, fplid: Option<&str>) -> ApiResponse
where
    D: PlayerDirectory,
    S: SquadSource,
{
    let team_id = match fplid.map(TeamId::parse) {
        Some(Ok(team_id)) => team_id,
        Some(Err(e)) => return ApiResponse::from_error(&e),
        None => return ApiResponse::error(400, INVALID_TEAM_ID),
    };

    match engine.fetch_squad(&team_id).await {
        Ok(entries) => ApiResponse::json(&entries),
        Err(e) => ApiResponse::from_error(&e),
    }
}
