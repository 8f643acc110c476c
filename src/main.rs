// Main entry point
use clap::Parser;
use colored::Colorize;
use open_deepl::application::{request, serve};
use open_deepl::infrastructure::config::{self, Config, Logging};
use open_deepl::infrastructure::network::deeplx::DeepLxTranslator;
use open_deepl::infrastructure::network::http::create_client;
use open_deepl::interfaces::cli::Cli;
use open_deepl::presentation::output::format_outcome;
use open_deepl::state::AppState;
use open_deepl::Outcome;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = config::load_config()?;
    config.apply_client_env();

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if !config.color {
        colored::control::set_override(false);
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }

    if cli.serve {
        return run_endpoint(&cli, config).await;
    }

    run_request(&cli, &config).await
}

/// Prompt, send one GET, print the result.
async fn run_request(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let presets = request::Presets {
        from: cli.from.clone(),
        to: cli.to.clone(),
        text: cli.text(),
    };

    let translation_request = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        request::gather_request(presets, &mut input, &mut output)?
    };

    let endpoint = cli.endpoint.as_deref().unwrap_or(&config.client.endpoint);
    let client = create_client(&config.client)?;
    let reply = request::send_request(&client, endpoint, &translation_request).await?;

    if cli.json || config.json {
        println!("{}", serde_json::to_string_pretty(&reply.body)?);
        return Ok(());
    }

    let outcome = reply.outcome()?;
    if let Outcome::Failed { status, .. } = &outcome {
        debug!(status, "endpoint refused the translation");
    }
    println!("{}", format_outcome(&outcome, config.color));

    Ok(())
}

/// Run the translation endpoint until Ctrl-C.
async fn run_endpoint(cli: &Cli, mut config: Config) -> anyhow::Result<()> {
    config.apply_server_env()?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            eprintln!("\nShutting down...");
            let _ = shutdown_tx.send(());
        }
    });

    let client = create_client(&config.client)?;
    let translator = Arc::new(DeepLxTranslator::new(client, config.deeplx.url.clone()));
    let state = AppState::new(translator, config.server.clone());

    let listener = TcpListener::bind(("0.0.0.0", config.server.port)).await?;
    println!(
        "{} Listening on the port {}",
        "[OK]".green(),
        config.server.port
    );

    serve::run_server(state, listener, async {
        let _ = shutdown_rx.await;
    })
    .await?;

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
