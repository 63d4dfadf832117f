use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gymtrack::cli::{self, Cli};
use gymtrack::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gymtrack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    let cli = Cli::parse();
    let config = Config::from_env();
    tracing::debug!("Using API at {}", cli.api_url.as_deref().unwrap_or(&config.api_url));

    match cli::run(cli, config).await {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            Ok(())
        }
        Err(failure) => {
            eprintln!("{}", failure.notice());
            std::process::exit(1);
        }
    }
}
