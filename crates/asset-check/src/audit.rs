use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use liftplan_catalog::{ExerciseRecord, RemovedExercise, still_image_url};
use reqwest::{Client, redirect::Policy};

/// A single probe fails after this long; the run itself carries on.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Partition of the catalog into records with at least one reachable image
/// and records without any.
pub struct AssetAudit {
    pub kept: Vec<ExerciseRecord>,
    pub removed: Vec<RemovedExercise>,
}

/// Probe every record's animated and still image and partition the catalog.
pub async fn run(records: Vec<ExerciseRecord>) -> anyhow::Result<AssetAudit> {
    let client = Client::builder()
        .timeout(PROBE_TIMEOUT)
        .redirect(Policy::none())
        .build()?;

    let progress = ProgressBar::new(records.len() as u64)
        .with_style(ProgressStyle::with_template("[{pos}/{len}] {msg}")?);

    let audit = audit_with(records, &progress, |url| {
        let client = client.clone();
        async move { probe(&client, &url).await }
    })
    .await;

    progress.finish_and_clear();
    Ok(audit)
}

/// Sequential audit loop with the probe injected, so the partition logic is
/// testable without a network. Records are checked one at a time to keep the
/// request rate against the asset host low.
async fn audit_with<F, Fut>(
    records: Vec<ExerciseRecord>,
    progress: &ProgressBar,
    mut probe: F,
) -> AssetAudit
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = bool>,
{
    let mut kept = Vec::new();
    let mut removed = Vec::new();

    for record in records {
        progress.set_message(record.name.clone());

        let animated_ok = match &record.gif_url {
            Some(url) if !url.is_empty() => probe(url.clone()).await,
            _ => false,
        };
        let reachable = animated_ok || probe(still_image_url(&record.exercise_id)).await;

        if reachable {
            kept.push(record);
        } else {
            tracing::debug!("no reachable image for {} ({})", record.name, record.exercise_id);
            removed.push(RemovedExercise::from(&record));
        }
        progress.inc(1);
    }

    AssetAudit { kept, removed }
}

/// Existence check against a single image URL. Timeouts and network errors
/// count as unreachable; they never abort the run.
async fn probe(client: &Client, url: &str) -> bool {
    match client.head(url).send().await {
        Ok(response) => reachable(response.status().as_u16()),
        Err(_) => false,
    }
}

fn reachable(status: u16) -> bool {
    (200..400).contains(&status)
}

#[cfg(test)]
mod tests {
    use liftplan_catalog::CatalogDocument;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(301, true)]
    #[case(399, true)]
    #[case(400, false)]
    #[case(404, false)]
    #[case(500, false)]
    #[case(199, false)]
    fn test_reachable(#[case] status: u16, #[case] expected: bool) {
        assert_eq!(reachable(status), expected);
    }

    fn records() -> Vec<ExerciseRecord> {
        CatalogDocument::parse(
            r#"{
                "success": true,
                "total": 3,
                "data": [
                    {
                        "exerciseId": "alive",
                        "name": "barbell bench press",
                        "gifUrl": "https://media.example.org/alive.gif"
                    },
                    {
                        "exerciseId": "stillonly",
                        "name": "plank",
                        "gifUrl": ""
                    },
                    {
                        "exerciseId": "dead",
                        "name": "sledge hammer",
                        "gifUrl": "https://media.example.org/dead.gif"
                    }
                ]
            }"#,
        )
        .unwrap()
        .data
    }

    #[tokio::test]
    async fn test_audit_partitions_records() {
        let progress = ProgressBar::hidden();
        let audit = audit_with(records(), &progress, |url| async move {
            url.contains("alive") || url.contains("stillonly")
        })
        .await;

        assert_eq!(
            audit
                .kept
                .iter()
                .map(|record| record.exercise_id.as_str())
                .collect::<Vec<_>>(),
            vec!["alive", "stillonly"]
        );
        assert_eq!(
            audit.removed,
            vec![RemovedExercise {
                id: "dead".to_string(),
                name: "sledge hammer".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_audit_probes_still_image_when_animated_url_is_empty() {
        let progress = ProgressBar::hidden();
        let mut probed = Vec::new();
        let audit = audit_with(records()[1..2].to_vec(), &progress, |url| {
            probed.push(url);
            async { true }
        })
        .await;

        assert_eq!(audit.kept.len(), 1);
        assert_eq!(
            probed,
            vec!["https://static.exercisedb.dev/api/images/stillonly.png".to_string()]
        );
    }

    #[tokio::test]
    async fn test_audit_with_all_probes_failing_removes_everything() {
        let progress = ProgressBar::hidden();
        let audit = audit_with(records(), &progress, |_| async { false }).await;
        assert_eq!(audit.kept, vec![]);
        assert_eq!(audit.removed.len(), 3);
    }
}
