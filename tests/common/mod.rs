//! Common test utilities for bedrock-agents-rs

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::ActionResponseAssertions;
pub use fixtures::{EventFactory, StreamFactory};

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
