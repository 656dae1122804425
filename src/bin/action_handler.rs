//! Lambda function backing the agent's action group

use bedrock_agents::action_group::{ActionDispatcher, ActionGroupEvent, ActionGroupResponse};
use bedrock_agents::config::LoggingConfig;
use bedrock_agents::utils::init_tracing;
use lambda_runtime::{Error, LambdaEvent, service_fn};

async fn handle(
    dispatcher: &ActionDispatcher,
    event: LambdaEvent<ActionGroupEvent>,
) -> Result<ActionGroupResponse, Error> {
    let (event, context) = event.into_parts();
    tracing::debug!(request_id = %context.request_id, "Action group invocation");
    Ok(dispatcher.dispatch(&event))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let logging = LoggingConfig {
        level: LoggingConfig::from_env()?.level,
        ..LoggingConfig::lambda()
    };
    init_tracing(&logging)?;

    let dispatcher = ActionDispatcher::new();
    lambda_runtime::run(service_fn(|event| handle(&dispatcher, event))).await
}
