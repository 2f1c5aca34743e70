use clap::Parser;
use quiz_maze::{Args, Config, ServerError};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    if let Err(e) = start(args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn start(args: Args) -> Result<(), ServerError> {
    let config = Config::try_from(args)?;
    quiz_maze::server::run(config).await
}
