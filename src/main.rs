//! bedrock-agent - command line client for the sample agent
//!
//! Invokes the deployed agent, replays action group events locally and
//! serves the dispatcher over HTTP.

use anyhow::{Context, Result};
use bedrock_agents::action_group::{ActionDispatcher, ActionGroupEvent, TextOperation};
use bedrock_agents::agent::{AgentHandler, AwsCredentials, BedrockAgentClient};
use bedrock_agents::config::{Config, DEFAULT_STACK_NAME, StackOutputs, Validate};
use bedrock_agents::server::ActionServer;
use bedrock_agents::utils::{AgentError, init_tracing};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "bedrock-agent", version, about)]
struct Cli {
    /// YAML configuration file; environment variables are used when absent
    #[arg(short, long, env = "BEDROCK_AGENT_CONFIG")]
    config: Option<PathBuf>,

    /// CDK outputs file providing the agent and alias ids
    #[arg(long, env = "BEDROCK_STACK_OUTPUTS")]
    stack_outputs: Option<PathBuf>,

    /// Stack name inside the outputs file
    #[arg(long, default_value = DEFAULT_STACK_NAME)]
    stack_name: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send a free-form question to the agent
    Ask {
        question: String,
        #[arg(long)]
        session_id: Option<String>,
    },
    /// Ask the agent to run a text operation through its action group
    ProcessText {
        text: String,
        #[arg(short, long)]
        operation: TextOperation,
        #[arg(long)]
        session_id: Option<String>,
    },
    /// Ask the agent for the current time
    CurrentTime {
        #[arg(long)]
        session_id: Option<String>,
    },
    /// Run an action group event file through the local dispatcher
    Dispatch { event: PathBuf },
    /// Print the action group OpenAPI schema
    Schema,
    /// Serve the dispatcher over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if e
                .downcast_ref::<AgentError>()
                .is_some_and(AgentError::is_remote)
            {
                eprintln!("The error was reported by the agent runtime");
            }
            ExitCode::FAILURE
        }
    }
}

async fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    if let Some(path) = &cli.stack_outputs {
        let outputs = StackOutputs::from_file(path, &cli.stack_name)
            .await
            .with_context(|| format!("reading stack outputs from {}", path.display()))?;
        config.apply_stack_outputs(&outputs);
    }

    Ok(config)
}

fn agent_handler(config: &Config) -> Result<AgentHandler<BedrockAgentClient>> {
    config.agent.validate().map_err(anyhow::Error::msg)?;
    let credentials = AwsCredentials::from_env()?;
    let client = BedrockAgentClient::new(config.agent.clone(), credentials)?;
    Ok(AgentHandler::new(client))
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(&cli).await?;
    config.logging.validate().map_err(anyhow::Error::msg)?;
    init_tracing(&config.logging)?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Ask {
            question,
            session_id,
        } => {
            let answer = agent_handler(&config)?
                .ask_question(&question, session_id.as_deref())
                .await?;
            println!("{}", answer);
        }
        Command::ProcessText {
            text,
            operation,
            session_id,
        } => {
            let answer = agent_handler(&config)?
                .process_text(&text, operation, session_id.as_deref())
                .await?;
            println!("{}", answer);
        }
        Command::CurrentTime { session_id } => {
            let answer = agent_handler(&config)?
                .get_current_time(session_id.as_deref())
                .await?;
            println!("{}", answer);
        }
        Command::Dispatch { event } => {
            let content = tokio::fs::read_to_string(&event)
                .await
                .with_context(|| format!("reading {}", event.display()))?;
            let event: ActionGroupEvent =
                serde_json::from_str(&content).context("parsing action group event")?;
            let response = ActionDispatcher::new().dispatch(&event);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Schema => {
            let schema = bedrock_agents::action_group_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.server.validate().map_err(anyhow::Error::msg)?;
            info!(version = bedrock_agents::VERSION, "Starting local action group server");
            ActionServer::new(config.server).start().await?;
        }
    }

    Ok(())
}
