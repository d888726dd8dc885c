mod api;
mod cli;
mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use pathfinder_core::auth::AuthSession;
use pathfinder_core::catalog::{CatalogManager, Difficulty, ResourceType};
use pathfinder_core::state::{io, KeyValueStore, PathfinderDb, ThemePreference};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use api::{AppState, SharedState};
use cli::CustomCommand;
use config::PersistedConfig;

#[derive(Parser, Clone)]
#[command(author, version, about = "Pathfinder - curated learning paths and progress tracking")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the Pathfinder API server (default)
    Serve {
        /// Port to listen on; falls back to the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List predefined roadmaps with progress
    Roadmaps {
        /// Case-insensitive title/description search
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Browse the resource library
    Resources {
        #[arg(short, long)]
        search: Option<String>,
        /// Resource types, comma separated
        #[arg(short = 't', long = "type", value_delimiter = ',')]
        types: Vec<ResourceType>,
        /// Difficulty levels, comma separated
        #[arg(short, long, value_delimiter = ',')]
        difficulty: Vec<Difficulty>,
    },
    /// Browse practice projects
    Projects {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short, long, value_delimiter = ',')]
        difficulty: Vec<Difficulty>,
    },
    /// Manage custom learning paths
    Custom {
        #[command(subcommand)]
        command: CustomCommand,
    },
    /// Show or flip the dark-mode preference
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

pub async fn run_server(
    port: u16,
    catalog: CatalogManager,
    theme: ThemePreference,
    config: PersistedConfig,
) -> anyhow::Result<()> {
    let state: SharedState = Arc::new(AppState {
        catalog: RwLock::new(catalog),
        session: RwLock::new(AuthSession::new()),
        theme: RwLock::new(theme),
        config: RwLock::new(config),
    });

    let app = api::router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("Pathfinder server running at http://{}", addr);
    tracing::info!("   Catalog: /api/v1/roadmaps, /resources, /projects");
    tracing::info!("   Custom:  /api/v1/custom-paths, /custom-path/pool");
    tracing::info!("   Session: /api/v1/session, /session/login, /session/logout");
    tracing::info!("   Theme:   /api/v1/theme, /theme/toggle");
    tracing::info!("   Config:  /api/v1/config (GET, PATCH)");
    tracing::info!("   Docs:    /api/v1/openapi.json");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pathfinder_server=info,pathfinder_core=info")),
        )
        .init();

    let args = Args::parse();

    io::ensure_runtime_dir().await?;
    let db: Arc<dyn KeyValueStore> = Arc::new(PathfinderDb::open()?);
    let config = PersistedConfig::load().await;

    let mut catalog = CatalogManager::open(db.clone(), config.catalog_options());

    match args.command.unwrap_or(CliCommand::Serve { port: None }) {
        CliCommand::Serve { port } => {
            let theme = ThemePreference::load(db, config.prefer_dark());
            let port = port.unwrap_or_else(|| config.port());
            run_server(port, catalog, theme, config).await?;
        }
        CliCommand::Roadmaps { search } => cli::roadmaps(&catalog, search),
        CliCommand::Resources {
            search,
            types,
            difficulty,
        } => cli::resources(&catalog, search, types, difficulty),
        CliCommand::Projects { search, difficulty } => cli::projects(search, difficulty),
        CliCommand::Custom { command } => cli::custom(&mut catalog, command)?,
        CliCommand::Theme { toggle } => {
            let mut theme = ThemePreference::load(db, config.prefer_dark());
            cli::theme(&mut theme, toggle)?;
        }
    }

    Ok(())
}
