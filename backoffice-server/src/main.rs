use backoffice_server::utils::logger;
use backoffice_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_dir = config.log_dir();
    logger::init_logger(&config.log_level, config.is_production(), Some(log_dir.as_path()))?;

    tracing::info!(environment = %config.environment, "Marketplace back office starting");

    let state = ServerState::initialize(&config).await?;
    let server = Server::with_state(config, state);
    server.run().await
}
