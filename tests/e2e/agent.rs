//! E2E tests for the deployed sample agent
//!
//! These tests make real InvokeAgent calls and require AWS credentials plus
//! BEDROCK_AGENT_ID and BEDROCK_AGENT_ALIAS_ID.
//! Run with: cargo test -- --ignored e2e

#[cfg(test)]
mod tests {
    use crate::skip_without_env;
    use bedrock_agents::agent::{AgentHandler, AwsCredentials, BedrockAgentClient};
    use bedrock_agents::config::Config;
    use bedrock_agents::TextOperation;

    fn handler() -> AgentHandler<BedrockAgentClient> {
        let config = Config::from_env().expect("Failed to load configuration");
        let credentials = AwsCredentials::from_env().expect("Failed to load AWS credentials");
        let client = BedrockAgentClient::new(config.agent, credentials)
            .expect("Failed to create agent client");
        AgentHandler::new(client)
    }

    #[tokio::test]
    #[ignore]
    async fn test_ask_question() {
        skip_without_env!("BEDROCK_AGENT_ID");

        let answer = handler()
            .ask_question("Hello, what can you help me with?", None)
            .await;
        assert!(answer.is_ok(), "Invocation failed: {:?}", answer.err());
        assert!(!answer.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_process_text_uses_action_group() {
        skip_without_env!("BEDROCK_AGENT_ID");

        let answer = handler()
            .process_text("Hello world test message", TextOperation::CountWords, None)
            .await
            .expect("Invocation failed");
        assert!(answer.contains('4'), "Unexpected answer: {}", answer);
    }

    #[tokio::test]
    #[ignore]
    async fn test_current_time_in_shared_session() {
        skip_without_env!("BEDROCK_AGENT_ID");

        let session_id = bedrock_agents::generate_session_id();
        let handler = handler();
        let first = handler.get_current_time(Some(&session_id)).await;
        assert!(first.is_ok(), "Invocation failed: {:?}", first.err());

        let second = handler
            .ask_question("What did you just tell me?", Some(&session_id))
            .await;
        assert!(second.is_ok(), "Invocation failed: {:?}", second.err());
    }
}
