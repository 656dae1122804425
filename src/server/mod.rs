//! Local development server
//!
//! Serves the action group dispatcher over HTTP so events can be replayed
//! without deploying the Lambda function.

pub mod routes;
pub mod server;
pub mod state;

pub use server::ActionServer;
pub use state::AppState;
