use anyhow::Context;
use listing_desk::config::DeskConfig;
use listing_desk::form::{FormEdit, ListingFormPage};
use listing_desk::models::FormSection;
use listing_desk::submission::{HttpPropertyTransport, SubmissionWorkflow};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Listing Desk - Add Property");
    info!("==============================");

    let config = DeskConfig::load_or_default("listing-desk.json").await?;

    // Replay the saved draft onto a fresh form
    let raw = tokio::fs::read_to_string(&config.draft)
        .await
        .with_context(|| format!("Failed to read draft {}", config.draft.display()))?;
    let edits: Vec<FormEdit> = serde_json::from_str(&raw).context("Failed to parse draft edits")?;

    let mut page = ListingFormPage::new();
    for edit in edits {
        page.handle_edit(edit);
    }
    info!("Applied draft from {}", config.draft.display());

    for section in FormSection::ALL {
        let fields = section.fields();
        let filled = fields
            .iter()
            .filter(|field| !page.snapshot().get(**field).is_empty())
            .count();
        info!("   {:?}: {}/{} fields filled", section, filled, fields.len());
    }
    let selected: Vec<&str> = page
        .snapshot()
        .amenities
        .iter()
        .filter(|(_, on)| **on)
        .map(|(key, _)| key.as_str())
        .collect();
    info!("   Amenities: {}", selected.join(", "));

    let transport = HttpPropertyTransport::with_config(&config.submit)?;
    info!("Submitting to {}", transport.endpoint());
    let workflow = SubmissionWorkflow::new(transport);

    match page.handle_submit(&workflow, config.user.as_ref()).await {
        Some(alert) if alert.is_success() => info!("✅ {}", alert.message),
        Some(alert) => warn!("❌ {}", alert.message),
        None => warn!("Submission skipped"),
    }

    let json = serde_json::to_string_pretty(page.snapshot())?;
    tokio::fs::write(&config.output, json).await?;
    info!("💾 Saved form snapshot to {}", config.output.display());

    Ok(())
}
