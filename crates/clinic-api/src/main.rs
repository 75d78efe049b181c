//! Clinic agent host
//!
//! Serves the registrar agent over A2A together with the patient dashboard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clinic_framework::ClinicConfig;
use clinic_framework::agents::{AgentRegistry, RegistrarAgent};
use clinic_framework::registry::RegistryStore;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod api;

/// Command-line arguments for the clinic agent host
#[derive(Parser, Debug)]
#[clap(name = "clinic-api", about = "A2A host and patient dashboard for the clinic registrar")]
struct Args {
    /// Path to the TOML configuration file
    #[clap(short, long, default_value = "clinic.toml")]
    config: PathBuf,

    /// Host to bind to
    #[clap(long)]
    host: Option<String>,

    /// Port to listen on
    #[clap(short, long)]
    port: Option<u16>,

    /// Directory with index.html, served under /static
    #[clap(short, long)]
    dashboard_dir: Option<PathBuf>,

    /// Registry file, relative to the dashboard directory unless absolute
    #[clap(long)]
    registry_file: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<ClinicConfig> {
    let mut config = ClinicConfig::load(&args.config)
        .with_context(|| format!("Failed to load config file: {:?}", args.config))?;
    config.apply_env_overrides()?;

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = &args.dashboard_dir {
        config.server.dashboard_dir = dir.clone();
    }
    if let Some(file) = &args.registry_file {
        config.server.registry_file = file.clone();
    }
    Ok(config)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = load_config(&args)?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.base.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic agent host...");
    info!("Dashboard directory: {:?}", config.server.dashboard_dir);

    std::fs::create_dir_all(&config.server.dashboard_dir).with_context(|| {
        format!(
            "Failed to create dashboard directory: {:?}",
            config.server.dashboard_dir
        )
    })?;

    let store = RegistryStore::new(config.registry_path());
    let patients = store
        .load()
        .context("Failed to reset corrupt patient registry")?;
    info!(
        "Patient registry {:?} holds {} records",
        store.path(),
        patients.len()
    );

    let agents = AgentRegistry::new();
    agents
        .register_agent(Box::new(RegistrarAgent::new(store.clone())))
        .await?;
    for agent_id in agents.list_agents().await {
        info!("Registered agent: {}", agent_id);
    }

    info!(
        "Medical advisor is not hosted here, triage expects it at {}",
        config.agents.advisor_url
    );

    let app = api::app(agents, store, config.server.dashboard_dir.clone());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
