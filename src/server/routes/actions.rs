//! Action group endpoints
//!
//! `POST /invoke` accepts the same event JSON the platform sends to the Lambda
//! function and answers with the response envelope.

use crate::action_group::{ActionGroupEvent, action_group_schema};
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use tracing::debug;

/// Configure action group routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/invoke", web::post().to(invoke))
        .route("/schema", web::get().to(schema));
}

/// Run one event through the dispatcher
///
/// The HTTP status is always 200 once the event parses; the outcome lives in
/// `response.httpStatusCode` as it does for the Lambda function.
async fn invoke(state: web::Data<AppState>, event: web::Json<ActionGroupEvent>) -> HttpResponse {
    let response = state.dispatcher.dispatch(&event);
    HttpResponse::Ok().json(response)
}

async fn schema() -> HttpResponse {
    debug!("Action group schema requested");
    HttpResponse::Ok().json(action_group_schema())
}
