//! Chatroute web server binary.
//!
//! Serves the chat page and the JSON chat endpoints on the configured
//! host and port until interrupted.

use clap::Parser;
use tracing::info;

/// CLI arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "chatroute_server", about = "Chatroute demo chatbot server", version)]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "CHATROUTE_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "CHATROUTE_PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("info,chatroute_api=debug,chatroute_core=debug")
                }),
        )
        .init();

    let args = Args::parse();
    let config = chatroute_api::config::ApiConfig::new(&args.host, args.port);

    info!(
        version = chatroute_core::version(),
        bind_addr = %config.bind_addr,
        "starting chatroute_server"
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    let app = chatroute_api::router(chatroute_api::AppState { config });

    info!(addr = %local_addr, "chat server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("chat server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
