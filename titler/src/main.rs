use std::sync::Arc;

use clap::Parser;
use mimalloc::MiMalloc;
use parking_lot::Mutex;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod http;
mod state;
mod timecode;

use cli::CliArgs;
use config::AppConfig;
use error::AppError;
use scheduler::Scheduler;
use state::AppState;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    if let Err(error) = bootstrap() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

#[tokio::main]
async fn bootstrap() -> Result<(), AppError> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("titler starting up");

    let config = AppConfig::load(args.config.as_deref())?;
    info!(downstream = %config.downstream_addr(), http = %config.http_bind_addr, "configuration loaded");

    let time_source = timecode::spawn(&config.timecode_bind_addr, config.timecode_address.clone(), config.strict_time_address)
        .await
        .map_err(|e| AppError::Initialization(format!("failed to bind timecode socket: {e}")))?;

    let dispatcher = Arc::new(dispatcher::Dispatcher::spawn(config.downstream_addr(), config.downstream_channel_layer, config.page_config()));

    let app_state = Arc::new(AppState {
        scheduler: Arc::new(Mutex::new(Scheduler::new(scheduler::Mode::Autonomous))),
        dispatcher,
        time_source,
        session: Arc::new(Mutex::new(None)),
    });

    state::spawn_tick_task(app_state.clone());

    let router = http::router(app_state);
    let listener = tokio::net::TcpListener::bind(&config.http_bind_addr)
        .await
        .map_err(|e| AppError::Initialization(format!("failed to bind HTTP socket: {e}")))?;

    info!(addr = %config.http_bind_addr, "HTTP control surface listening");

    axum::serve(listener, router).await.map_err(|e| {
        error!(error = %e, "HTTP server exited");
        AppError::Initialization(e.to_string())
    })?;

    Ok(())
}
