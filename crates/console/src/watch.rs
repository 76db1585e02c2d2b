//! Periodic dashboard refresh loop.

use std::time::Duration;

use caredesk_dashboard::Dashboard;

use crate::render;

/// Refresh and render the overview every `interval` until Ctrl-C.
///
/// The first render happens immediately. Fetch failures keep the last
/// good values on screen; the tick itself is the retry.
pub async fn run(dashboard: &mut Dashboard, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                dashboard.refresh_all().await;
                match dashboard.view() {
                    Some(view) => {
                        println!("--- {} ---", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"));
                        print!("{}", render::overview(&view));
                    }
                    None => {
                        if dashboard.state().identity.is_some() {
                            tracing::warn!("Nothing to show, the signed-in account is not an admin");
                        }
                    }
                }
            }
            _ = &mut shutdown => {
                tracing::info!("Stopping watch");
                break;
            }
        }
    }
}
