//! Integration tests for bedrock-agents-rs

pub mod action_group_tests;
pub mod agent_client_tests;
pub mod config_tests;
