//! Route table. Static `/random` wins over the `:id` capture in axum's
//! matcher, so `GET /api/player/random` never parses as an id lookup.

use crate::handlers::{common, player, user};
use crate::state::AppState;
use axum::http::{header, HeaderValue};
use axum::middleware::map_response;
use axum::response::Response;
use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

/// Spells out the UTF-8 charset on JSON responses; axum's `Json` emits a
/// bare `application/json`.
async fn set_json_charset(mut response: Response) -> Response {
    let bare_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "application/json")
        .unwrap_or(false);
    if bare_json {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
    }
    response
}

/// Entity routes plus the liveness probe. Takes fully constructed services
/// through `AppState`; no database handle is needed here.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(common::health))
        .route("/api/player", get(player::list).post(player::create))
        .route("/api/player/random", get(player::random))
        .route(
            "/api/player/:id",
            get(player::get).put(player::update).delete(player::delete),
        )
        .route("/api/users", get(user::list).post(user::create))
        .route(
            "/api/users/:id",
            get(user::get).put(user::update).delete(user::delete),
        )
        .layer(map_response(set_json_charset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Readiness probe; the only route that talks to the pool directly.
pub fn probe_routes(pool: PgPool) -> Router {
    Router::new()
        .route("/ready", get(common::ready))
        .layer(map_response(set_json_charset))
        .with_state(pool)
}
