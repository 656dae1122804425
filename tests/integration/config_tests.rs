//! Configuration loading and validation tests

#[cfg(test)]
mod tests {
    use bedrock_agents::config::{Config, DEFAULT_STACK_NAME, StackOutputs, Validate};
    use bedrock_agents::config::models::logging::LogFormat;
    use std::io::Write;

    const EXAMPLE_CONFIG: &str = include_str!("../../config/agent.yaml.example");

    #[tokio::test]
    async fn test_example_config_is_valid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXAMPLE_CONFIG.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert!(config.validate().is_ok(), "{:?}", config.validate());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[tokio::test]
    async fn test_stack_outputs_overlay() {
        let mut outputs_file = tempfile::NamedTempFile::new().unwrap();
        write!(
            outputs_file,
            r#"{{
                "{}": {{
                    "AgentId": "AGENTXYZ",
                    "AgentAliasId": "ALIASXYZ",
                    "AgentArn": "arn:aws:bedrock:eu-west-1:123456789012:agent/AGENTXYZ",
                    "ActionGroupLambdaArn": "arn:aws:lambda:eu-west-1:123456789012:function:actions"
                }}
            }}"#,
            DEFAULT_STACK_NAME
        )
        .unwrap();

        let outputs = StackOutputs::from_file(outputs_file.path(), DEFAULT_STACK_NAME)
            .await
            .unwrap();
        let mut config = Config::default();
        config.apply_stack_outputs(&outputs);

        assert_eq!(config.agent.agent_id, "AGENTXYZ");
        assert_eq!(config.agent.agent_alias_id, "ALIASXYZ");
        assert_eq!(config.agent.region, "eu-west-1");
        assert!(config.agent.validate().is_ok());
    }

    #[tokio::test]
    async fn test_missing_stack_is_an_error() {
        let mut outputs_file = tempfile::NamedTempFile::new().unwrap();
        write!(outputs_file, r#"{{"OtherStack": {{}}}}"#).unwrap();

        let err = StackOutputs::from_file(outputs_file.path(), DEFAULT_STACK_NAME)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("BedrockAgentStack"));
    }

    #[test]
    fn test_default_config_needs_agent_ids() {
        let config = Config::default();
        assert!(config.server.validate().is_ok());
        assert!(config.logging.validate().is_ok());
        assert!(config.agent.validate().is_err());
    }
}
