//! Headless run: boot the services and log a report.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, info_span, warn, Instrument};

use dm_app::usecases::tutorial::{AppState, PlatformEvent};
use dm_core::config::AppConfig;

use super::wiring::{wire_dependencies, AppServices};

const PLATFORM_EVENT_BUFFER: usize = 16;

/// Boot the services from `config`, log today's plan, the analytics summary
/// and the tutorial state, then shut down.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let services = wire_dependencies(&config)?;
    info!(
        store = %services.paths.store_path.display(),
        tasks_export = %services.paths.tasks_export_path.display(),
        "Services wired"
    );

    report(&services)
        .instrument(info_span!("bootstrap.run_app"))
        .await;
    Ok(())
}

async fn report(services: &AppServices) {
    services.tutorial.initialize().await;

    let targets = Arc::clone(&services.targets).spawn();
    let (events_tx, events_rx) = mpsc::channel(PLATFORM_EVENT_BUFFER);
    let pump = Arc::clone(&services.lifecycle).spawn(events_rx);
    for event in [
        PlatformEvent::AppState(AppState::Active),
        PlatformEvent::Navigated("/plan".to_string()),
    ] {
        if events_tx.send(event).await.is_err() {
            warn!("Lifecycle pump stopped early");
            break;
        }
    }

    let tutorial = services.tutorial.auto_start().await;
    match serde_json::to_string(&tutorial) {
        Ok(json) => info!(snapshot = %json, "Tutorial"),
        Err(e) => warn!(error = %e, "Failed to serialize tutorial snapshot"),
    }

    match services.plan.execute_today().await {
        Ok(plan) => info!(
            date = %plan.date,
            theme = plan.theme.title,
            tasks = plan.tasks.len(),
            completed = plan.completed,
            "Today's plan"
        ),
        Err(e) => warn!(error = %e, "Plan summary unavailable"),
    }

    match services.analytics.execute().await {
        Ok(summary) if !summary.has_data => info!("No analytics data yet"),
        Ok(summary) => info!(
            completion = summary.completion_rate.overall,
            planning_streak = summary.planning_streak,
            execution_streak = summary.execution_streak,
            mit_rate = ?summary.mit_completion_rate,
            categories = summary.category_breakdown.len(),
            "Analytics"
        ),
        Err(e) => warn!(error = %e, "Analytics unavailable"),
    }

    drop(events_tx);
    if let Err(e) = pump.await {
        warn!(error = %e, "Lifecycle pump panicked");
    }
    targets.abort();
}
