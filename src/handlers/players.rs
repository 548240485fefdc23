use crate::error::ApiError;
use crate::models::{Player, UpdateScoreRequest};
use crate::registry::PlayerRegistry;
use actix_web::{web, HttpResponse};
use log::debug;

/// /addPlayer - register a player, replacing any player with the same id
pub async fn add_player(
    registry: web::Data<PlayerRegistry>,
    req: web::Json<Option<Player>>,
) -> HttpResponse {
    // a `null` body registers the zero player
    let player = req.into_inner().unwrap_or_default();
    debug!("addPlayer: id={}, score={}", player.id, player.score);
    registry.put(player);

    HttpResponse::Created().finish()
}

/// /getPlayer?id=<id> - fetch one player
pub async fn get_player(
    registry: web::Data<PlayerRegistry>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, ApiError> {
    // first `id` wins when the key is repeated; absent means the empty id
    let id = query
        .iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();
    let player = registry.get(id).ok_or(ApiError::PlayerNotFound)?;

    Ok(HttpResponse::Ok().json(player))
}

/// /updateScore - overwrite the score of an existing player
pub async fn update_score(
    registry: web::Data<PlayerRegistry>,
    req: web::Json<Option<UpdateScoreRequest>>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner().unwrap_or_default();
    if !registry.update_score(&req.id, req.score) {
        return Err(ApiError::PlayerNotFound);
    }
    debug!("updateScore: id={}, score={}", req.id, req.score);

    Ok(HttpResponse::Ok().finish())
}

/// /listPlayers - every registered player, `[]` when there are none
pub async fn list_players(registry: web::Data<PlayerRegistry>) -> HttpResponse {
    HttpResponse::Ok().json(registry.list())
}
