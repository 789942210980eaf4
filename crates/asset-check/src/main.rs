mod audit;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use liftplan_catalog::CatalogDocument;
use tracing_subscriber::EnvFilter;

/// Check that each exercise's image assets resolve and prune entries whose
/// images are unreachable.
#[derive(Parser)]
#[command(name = "asset-check")]
struct Args {
    /// Catalog document to check
    #[arg(long, default_value = "exercises.json")]
    input: PathBuf,
    /// Cleaned catalog output
    #[arg(long, default_value = "exercises_clean.json")]
    output: PathBuf,
    /// Removed-exercises output
    #[arg(long, default_value = "removed_exercises.json")]
    removed: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let raw = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let document = CatalogDocument::parse(&raw)?;

    tracing::info!("checking images of {} exercises", document.data.len());
    let audit = audit::run(document.data).await?;
    tracing::info!("kept {} exercises", audit.kept.len());
    tracing::info!(
        "removed {} exercises without any reachable image",
        audit.removed.len()
    );

    tokio::fs::write(
        &args.output,
        serde_json::to_vec_pretty(&CatalogDocument::cleaned(audit.kept))?,
    )
    .await
    .with_context(|| format!("failed to write {}", args.output.display()))?;
    tokio::fs::write(&args.removed, serde_json::to_vec_pretty(&audit.removed)?)
        .await
        .with_context(|| format!("failed to write {}", args.removed.display()))?;

    Ok(())
}
