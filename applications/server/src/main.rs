/// Pindrop Server - Map-based music sharing server
use clap::{Parser, Subcommand};
use pindrop_server::{config::ServerConfig, create_router, state::AppState};
use pindrop_store::{PinCatalog, UserStore};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pindrop-server")]
#[command(about = "Pindrop map-based music sharing server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pindrop_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::AddUser { username, password } => {
            add_user(&username, &password).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting Pindrop Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Pin catalog is a startup precondition
    let pins = PinCatalog::load(&config.storage.pins_path).await?;
    let pins = Arc::new(pins);
    tracing::info!("Loaded {} pins", pins.len());

    // User store; the file is created on first write
    let users = UserStore::open(&config.storage.users_path).await?;
    let users = Arc::new(users);
    tracing::info!("User store ready at {:?}", config.storage.users_path);

    let app_state = AppState::new(users, Arc::clone(&pins));
    let app = create_router(app_state, config.server.static_dir.clone());

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(username: &str, password: &str) -> anyhow::Result<()> {
    let config = ServerConfig::load(None)?;
    let users = UserStore::open(&config.storage.users_path).await?;

    users.register(username, password).await?;
    println!("Created user '{username}'");

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load(None)?;
    let users = UserStore::open(&config.storage.users_path).await?;

    let names = users.usernames().await;
    if names.is_empty() {
        println!("No users registered");
    } else {
        for name in names {
            println!("{name}");
        }
    }

    Ok(())
}
