//! Action group backend
//!
//! The agent platform calls back into this module when it decides to use one of
//! the registered capabilities.
//!
//! - `types`: event and response envelope
//! - `operations`: the four text operations
//! - `dispatcher`: path/method routing and error downgrading
//! - `schema`: OpenAPI document describing the capabilities to the agent

pub mod dispatcher;
pub mod operations;
pub mod schema;
pub mod types;

pub use dispatcher::{
    ActionDispatcher, ActionError, ActionRequest, GET_CURRENT_TIME_PATH, PROCESS_TEXT_PATH,
};
pub use operations::{TextOperation, TextProcessingResult};
pub use schema::{ACTION_GROUP_NAME, action_group_schema};
pub use types::{
    APPLICATION_JSON, ActionGroupEvent, ActionGroupResponse, ActionResponse, AgentInfo,
    Parameter, RequestBody, ResponseContent,
};
