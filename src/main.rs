//! Manual exercise binary for the request façade.
//!
//! Dispatches one call through the full lifecycle (credential injection,
//! timers, loading gauge, notification slot) and prints the outcome.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use api_facade::config::{load_config, FacadeConfig};
use api_facade::observability::logging::init_logging;
use api_facade::{CredentialStore, LoadingGauge, NotificationHub, OutgoingCall, RequestDispatcher};

#[derive(Parser)]
#[command(name = "api-facade")]
#[command(about = "Send one request through the lifecycle façade", long_about = None)]
struct Cli {
    /// Call target: a path joined onto the configured base URL, or an
    /// absolute URL.
    target: String,

    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTTP method.
    #[arg(short, long, default_value = "GET")]
    method: String,

    /// JSON request payload.
    #[arg(short, long)]
    data: Option<String>,

    /// Per-call timeout budget in seconds.
    #[arg(short, long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FacadeConfig::default(),
    };
    init_logging(&config.observability.log_filter);

    let credentials = Arc::new(CredentialStore::new());
    if let Ok(token) = std::env::var("API_FACADE_TOKEN") {
        credentials.store(token);
    }
    let loading = Arc::new(LoadingGauge::new());
    let notifications = Arc::new(NotificationHub::new());
    let dispatcher =
        RequestDispatcher::new(&config, credentials, loading, notifications.clone())?;

    let mut call = OutgoingCall::new(reqwest::Method::from_str(&cli.method)?, &cli.target);
    if let Some(data) = &cli.data {
        call.payload = Some(serde_json::from_str(data)?);
    }
    if let Some(secs) = cli.timeout_secs {
        call = call.timeout(Duration::from_secs(secs));
    }

    match dispatcher.send(call).await {
        Ok(Some(body)) => println!("{}", serde_json::to_string_pretty(&body)?),
        Ok(None) => println!("(empty response)"),
        Err(err) => {
            eprintln!("request failed: {} (status {})", err.friendly_message, err.http_status);
            let note = notifications.current();
            if note.visible {
                eprintln!("notification: [{:?}] {}: {}", note.kind, note.title, note.description);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
