//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: Agent, server and logging validators plus the region table
//! - `tests`: Test suite for all validators

mod config_validators;
mod trait_def;

pub use config_validators::{AGENT_REGIONS, is_agent_region};
pub use trait_def::Validate;
