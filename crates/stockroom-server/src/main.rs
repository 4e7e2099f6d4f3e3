//! Stockroom Server
//!
//! Product catalogue over SQLite plus an in-memory todo map.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use stockroom_server::storage::{Database, MemoryTodoStore};
use stockroom_server::{router, AppState, ServerConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stockroom-server")]
#[command(author, version, about = "Stockroom - product catalogue HTTP service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Address to listen on (overrides STOCKROOM_BIND_ADDRESS)
    #[arg(long, global = true)]
    bind: Option<String>,

    /// SQLite database file (overrides STOCKROOM_DATABASE_PATH)
    #[arg(long, global = true)]
    database: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service (default)
    Serve,

    /// Create the database schema and exit
    InitDb,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[FATAL] {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing; RUST_LOG wins over the debug/verbose defaults
    let default_level = if cli.verbose || config.debug {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Stockroom Server v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run_server(config).await,
        Commands::InitDb => init_db(config).await,
    };

    if let Err(e) = result {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<ServerConfig> {
    let mut config = ServerConfig::load().context("Failed to load configuration")?;

    if let Some(bind) = &cli.bind {
        config.bind_address = bind.clone();
    }
    if let Some(database) = &cli.database {
        config.database_path = database.clone();
    }

    Ok(config)
}

async fn init_db(config: ServerConfig) -> Result<()> {
    let db = Database::connect(&config.database_path)
        .await
        .context("Failed to initialize database")?;
    db.close().await;

    info!("Schema ready at: {}", config.database_path);
    Ok(())
}

async fn run_server(config: ServerConfig) -> Result<()> {
    info!(
        "Config loaded: bind={}, db={}, debug={}",
        config.bind_address, config.database_path, config.debug
    );

    let addr = config.socket_addr()?;
    if config.debug && !addr.ip().is_loopback() {
        warn!(
            "Debug diagnostics are enabled on non-loopback address {} (error details will be exposed)",
            addr
        );
    }

    let db = Arc::new(
        Database::connect(&config.database_path)
            .await
            .context("Failed to initialize database")?,
    );
    let todos = Arc::new(MemoryTodoStore::new());

    let state = AppState::new(db.clone(), todos);
    let app = router(state, config.debug);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
