use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clinic_framework::ClinicConfig;
use clinic_framework::prelude::{
    ClearPatientsTool, ConsultAdvisorTool, ListPatientsTool, NotifyRegistrarTool,
    RegisterPatientTool, RegistryStore, RemoteAgentClient, Toolbox,
};
use colored::*;
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::FmtSubscriber;

/// Command-line arguments for the clinic CLI
#[derive(Parser, Debug)]
#[command(
    name = "clinic",
    about = "Clinic agents - triage tools for the advisor and registrar agents"
)]
pub struct Args {
    /// Path to the TOML configuration file
    #[clap(short, long, default_value = "clinic.toml")]
    config: PathBuf,

    /// Enable debug mode
    #[clap(short, long)]
    debug: bool,

    /// Patient registry file used by the local registry commands
    #[clap(long)]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register or update a patient in the local registry
    Register {
        name: String,
        illness: String,
        #[clap(long, default_value = "")]
        description: String,
    },
    /// List registered patients
    List,
    /// Remove every patient record
    Clear,
    /// Ask the medical advisor agent about symptoms.
    /// The advisor runs separately and must be listening at `agents.advisor_url`.
    Consult { symptoms: String },
    /// Send an intake note to the registrar agent
    Notify {
        #[clap(long)]
        name: String,
        #[clap(long)]
        illness: String,
        #[clap(long)]
        description: Option<String>,
    },
    /// Consult the advisor, then notify the registrar
    Triage {
        #[clap(long)]
        name: String,
        #[clap(long)]
        illness: String,
        #[clap(long)]
        symptoms: String,
        #[clap(long)]
        description: Option<String>,
    },
    /// List the available tools
    Tools,
    /// Run any tool by name with JSON parameters
    Tool {
        name: String,
        #[clap(long, default_value = "{}")]
        params: String,
    },
}

/// Every tool of the triage assistant and the registrar
fn build_toolbox(config: &ClinicConfig, registry: Option<PathBuf>) -> Result<Toolbox> {
    let store = RegistryStore::new(registry.unwrap_or_else(|| config.registry_path()));
    let client = RemoteAgentClient::from_endpoints(&config.agents)?;
    debug!("Using patient registry {:?}", store.path());

    Ok(Toolbox::new()
        .with_tool(Box::new(RegisterPatientTool::new(store.clone())))
        .with_tool(Box::new(ListPatientsTool::new(store.clone())))
        .with_tool(Box::new(ClearPatientsTool::new(store)))
        .with_tool(Box::new(ConsultAdvisorTool::new(
            client.clone(),
            config.agents.advisor_url.clone(),
        )))
        .with_tool(Box::new(NotifyRegistrarTool::new(
            client,
            config.agents.registrar_url.clone(),
        ))))
}

fn notify_params(name: &str, illness: &str, description: Option<&str>) -> Value {
    json!({ "patient_name": name, "illness_summary": illness, "description": description })
}

/// Translate a subcommand into `(tool name, parameters)` calls
fn tool_calls(command: &Command) -> Result<Vec<(String, Value)>> {
    let calls = match command {
        Command::Register {
            name,
            illness,
            description,
        } => vec![(
            "register_patient".to_string(),
            json!({ "name": name, "illness": illness, "description": description }),
        )],
        Command::List => vec![("list_patients".to_string(), json!({}))],
        Command::Clear => vec![("clear_patients".to_string(), json!({}))],
        Command::Consult { symptoms } => {
            vec![("consult_advisor".to_string(), json!({ "symptoms": symptoms }))]
        }
        Command::Notify {
            name,
            illness,
            description,
        } => vec![(
            "notify_registrar".to_string(),
            notify_params(name, illness, description.as_deref()),
        )],
        Command::Triage {
            name,
            illness,
            symptoms,
            description,
        } => vec![
            ("consult_advisor".to_string(), json!({ "symptoms": symptoms })),
            (
                "notify_registrar".to_string(),
                notify_params(name, illness, description.as_deref()),
            ),
        ],
        Command::Tool { name, params } => {
            let params: Value = serde_json::from_str(params)
                .with_context(|| format!("--params is not valid JSON: {}", params))?;
            vec![(name.clone(), params)]
        }
        Command::Tools => vec![],
    };
    Ok(calls)
}

fn print_tools(toolbox: &Toolbox) {
    println!("{}", "🧰 Available tools:".bright_cyan().bold());
    for tool in toolbox.iter() {
        let summary = tool.description().lines().next().unwrap_or_default();
        println!("• {} - {}", tool.name().bright_green().bold(), summary);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Setup tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ClinicConfig::load(&args.config)
        .with_context(|| format!("Failed to load config file: {:?}", args.config))?;
    config.apply_env_overrides()?;

    let toolbox = build_toolbox(&config, args.registry.clone())?;

    if matches!(args.command, Command::Tools) {
        print_tools(&toolbox);
        return Ok(());
    }

    for (tool_name, params) in tool_calls(&args.command)? {
        info!("Calling tool {}", tool_name);
        match toolbox.execute_to_text(&tool_name, params).await {
            Ok(text) => {
                println!("{}", format!("{}:", tool_name).bright_yellow().bold());
                println!("{}", text);
                println!();
            }
            Err(e) => {
                println!("{}", format!("❌ {} failed: {}", tool_name, e).red());
                return Err(e);
            }
        }
    }

    Ok(())
}
