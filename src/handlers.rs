pub mod players;

pub use players::{add_player, get_player, list_players, update_score};

use crate::error::ApiError;
use actix_web::web;

/// Registers every endpoint on one app, together with the extractor configs
/// that turn decode failures into [`ApiError::Decode`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/addPlayer", web::to(add_player))
        .route("/getPlayer", web::to(get_player))
        .route("/updateScore", web::to(update_score))
        .route("/listPlayers", web::to(list_players));
}

/// Largest request body accepted by `/addPlayer` and `/updateScore`.
pub const JSON_BODY_LIMIT: usize = 2 * 1024 * 1024;

// Bodies are decoded as JSON whatever Content-Type the client sends.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .content_type_required(false)
        .error_handler(|err, _req| ApiError::from(err).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| ApiError::from(err).into())
}
