//! HTTP server core implementation

use crate::action_group::ActionDispatcher;
use crate::config::ServerConfig;
use crate::server::routes::{self, ApiResponse};
use crate::server::state::AppState;
use crate::utils::error::{AgentError, Result};
use actix_web::{
    App, HttpResponse, HttpServer,
    error::InternalError,
    middleware::DefaultHeaders,
    web,
};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Local server exposing the action group dispatcher over HTTP
pub struct ActionServer {
    config: ServerConfig,
    state: AppState,
}

impl ActionServer {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_dispatcher(config, ActionDispatcher::new())
    }

    pub fn with_dispatcher(config: ServerConfig, dispatcher: ActionDispatcher) -> Self {
        let state = AppState::new(config.clone(), dispatcher);
        Self { config, state }
    }

    /// Mount state, JSON limits and routes on an actix service config
    pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
        move |cfg: &mut web::ServiceConfig| {
            let json_config = web::JsonConfig::default()
                .limit(state.config.max_body_size)
                .error_handler(|err, _req| {
                    let response =
                        HttpResponse::BadRequest().json(ApiResponse::error(err.to_string()));
                    InternalError::from_response(err, response).into()
                });

            cfg.app_data(web::Data::new(state))
                .app_data(json_config)
                .configure(routes::configure_routes);
        }
    }

    /// Start the HTTP server and run until shutdown
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting action group server on {}", bind_addr);

        let state = self.state;
        let mut server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .wrap(DefaultHeaders::new().add(("Server", crate::NAME)))
                .configure(Self::configure(state.clone()))
        });
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| AgentError::Config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("Action group server listening on {}", bind_addr);
        server.await?;
        info!("Action group server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
