//! `caredesk-console` -- terminal client for the hospital admin dashboard.
//!
//! Talks to the CareDesk backend REST API and renders the admin
//! overview, the appointments list, and the interactive feedback triage
//! panel. Only accounts with the admin role see any output.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default | Description                          |
//! |-------------------------|----------|---------|--------------------------------------|
//! | `CAREDESK_API_URL`      | yes      | --      | Backend base URL, e.g. `http://localhost:3000/api` |
//! | `CAREDESK_API_TOKEN`    | yes      | --      | Bearer token sent on every request   |
//! | `CAREDESK_TIMEOUT_SECS` | no       | `10`    | Per-request timeout in seconds       |
//! | `CAREDESK_REFRESH_SECS` | no       | `30`    | Watch mode refresh interval          |

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use caredesk_console::{render, session, watch};
use caredesk_dashboard::Dashboard;
use caredesk_gateway::{GatewayConfig, HttpGateway};

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Default watch-mode refresh interval in seconds.
const DEFAULT_REFRESH_SECS: u64 = 30;

/// CareDesk admin console.
#[derive(Parser, Debug)]
#[command(name = "caredesk-console", about = "Hospital admin dashboard console")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the counters and stats overview once.
    Overview,
    /// List appointments.
    Appointments,
    /// Open the feedback triage panel interactively.
    Feedback,
    /// Re-render the overview on an interval until Ctrl-C.
    Watch,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "caredesk_console=info,caredesk_dashboard=info,caredesk_gateway=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let base_url = std::env::var("CAREDESK_API_URL").unwrap_or_else(|_| {
        tracing::error!("CAREDESK_API_URL environment variable is required");
        std::process::exit(1);
    });
    let api_token = std::env::var("CAREDESK_API_TOKEN").unwrap_or_else(|_| {
        tracing::error!("CAREDESK_API_TOKEN environment variable is required");
        std::process::exit(1);
    });
    let timeout_secs: u64 = std::env::var("CAREDESK_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let refresh_secs: u64 = std::env::var("CAREDESK_REFRESH_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_REFRESH_SECS);

    let config = GatewayConfig::new(base_url, api_token)
        .with_timeout(Duration::from_secs(timeout_secs));
    let gateway = match HttpGateway::new(config) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build the API client");
            std::process::exit(1);
        }
    };
    let mut dashboard = Dashboard::new(gateway);

    match cli.command {
        Command::Overview => {
            dashboard.refresh_all().await;
            match dashboard.view() {
                Some(view) => print!("{}", render::overview(&view)),
                None => warn_if_gated(&dashboard),
            }
        }
        Command::Appointments => match dashboard.list_appointments().await {
            Ok(appointments) => print!("{}", render::appointments_table(&appointments)),
            Err(e) => {
                tracing::warn!(error = %e, "Appointments fetch failed");
                println!("{}", render::APPOINTMENTS_FETCH_ERROR);
            }
        },
        Command::Feedback => {
            dashboard.refresh_all().await;
            if dashboard.view().is_none() {
                warn_if_gated(&dashboard);
                return;
            }
            session::run(&mut dashboard).await;
        }
        Command::Watch => {
            watch::run(&mut dashboard, Duration::from_secs(refresh_secs)).await;
        }
    }
}

/// The dashboard renders nothing without an admin identity. Distinguish
/// the role gate from a plain fetch failure, which has already been
/// logged by the refresh.
fn warn_if_gated(dashboard: &Dashboard) {
    if dashboard.state().identity.is_some() {
        tracing::warn!("Nothing to show, the signed-in account is not an admin");
    }
}
