//! Agent invocation client
//!
//! Calls the agent's streaming `InvokeAgent` operation and assembles the
//! completion text.

pub mod client;
pub mod credentials;
pub mod errors;
pub mod event_stream;
pub mod handler;
pub mod session;
pub mod sigv4;
pub mod stream;
pub mod types;

pub use client::BedrockAgentClient;
pub use credentials::AwsCredentials;
pub use handler::{AgentHandler, AgentInvoker, current_time_prompt, process_text_prompt};
pub use session::{generate_session_id, validate_session_id};
pub use stream::CompletionStream;
pub use types::{CompletionEvent, InvokeAgentRequest, PayloadPart, SessionState};
