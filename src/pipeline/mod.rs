// Data processing pipeline: paginated ingestion followed by enrichment

pub mod ingestion;
pub mod processing;

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, instrument};

use crate::app::ports::JsonSource;
use crate::common::error::Result;
use crate::config::ApiConfig;
use crate::pipeline::ingestion::pagination::fetch_all;
use crate::pipeline::processing::enrich::{DefaultEnricher, EnrichedRecord, Enricher};

/// Key used in summaries for records whose derived field is null
pub const UNKNOWN_KEY: &str = "non renseigné";

/// Result of a complete pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub records: Vec<EnrichedRecord>,
    pub pages_fetched: usize,
    pub total_count: Option<u64>,
}

/// Record counts per derived field, as used by the map filters
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub by_arrondissement: BTreeMap<String, usize>,
    pub by_construction_group: BTreeMap<String, usize>,
    pub by_service: BTreeMap<String, usize>,
}

impl Summary {
    pub fn from_records(records: &[EnrichedRecord]) -> Self {
        let mut summary = Summary {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            bump(&mut summary.by_arrondissement, record.arrondissement.as_deref());
            bump(
                &mut summary.by_construction_group,
                record.construction_group.map(|g| g.label()),
            );
            bump(&mut summary.by_service, record.service.as_deref());
        }
        summary
    }
}

fn bump(counts: &mut BTreeMap<String, usize>, key: Option<&str>) {
    *counts.entry(key.unwrap_or(UNKNOWN_KEY).to_string()).or_insert(0) += 1;
}

impl PipelineResult {
    pub fn summary(&self) -> Summary {
        Summary::from_records(&self.records)
    }
}

pub struct Pipeline;

impl Pipeline {
    /// Fetch every page from `source` and enrich the records in order
    #[instrument(skip(source, api), fields(base_url = %api.base_url))]
    pub async fn run<S>(source: &S, api: &ApiConfig) -> Result<PipelineResult>
    where
        S: JsonSource + ?Sized,
    {
        Self::run_with_enricher(source, api, &DefaultEnricher::new()).await
    }

    pub async fn run_with_enricher<S, E>(source: &S, api: &ApiConfig, enricher: &E) -> Result<PipelineResult>
    where
        S: JsonSource + ?Sized,
        E: Enricher + ?Sized,
    {
        let fetched = fetch_all(source, &api.base_url, api.page_limit).await?;
        let records = enricher.enrich_all(&fetched.records);
        info!(records = records.len(), pages = fetched.pages_fetched, "Pipeline finished");

        Ok(PipelineResult {
            records,
            pages_fetched: fetched.pages_fetched,
            total_count: fetched.total_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::RawRecord;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct OnePage(Value);

    #[async_trait]
    impl JsonSource for OnePage {
        async fn get_json(&self, _url: &str) -> Result<Value> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_run_enriches_fetched_records() {
        let source = OnePage(json!({
            "total_count": 2,
            "results": [
                { "code_postal": "75012", "type_construction": "Couverture", "service": "SLT" },
                { "code_postal": null, "type_construction": "", "service": "sla 3-4" }
            ]
        }));

        let result = Pipeline::run(&source, &ApiConfig::default()).await.unwrap();

        assert_eq!(result.pages_fetched, 1);
        assert_eq!(result.total_count, Some(2));
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].arrondissement.as_deref(), Some("12e"));
        assert_eq!(result.records[1].service.as_deref(), Some("SLA 3/4"));
        assert_eq!(result.records[1].construction_group, None);
    }

    #[test]
    fn test_summary_counts() {
        let enricher = DefaultEnricher::new();
        let raws: Vec<RawRecord> = [
            json!({ "code_postal": "75011", "type_construction": "Rénovation", "service": "SE" }),
            json!({ "code_postal": "75011", "type_construction": "Façade", "service": "se" }),
            json!({ "type_construction": "Divers" }),
        ]
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect();

        let summary = Summary::from_records(&enricher.enrich_all(&raws));

        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_arrondissement.get("11e"), Some(&2));
        assert_eq!(summary.by_arrondissement.get(UNKNOWN_KEY), Some(&1));
        assert_eq!(summary.by_construction_group.get("Rénovation"), Some(&1));
        assert_eq!(summary.by_construction_group.get("Ravalement"), Some(&1));
        assert_eq!(summary.by_construction_group.get("Autre"), Some(&1));
        assert_eq!(summary.by_service.get("SE"), Some(&2));
        assert_eq!(summary.by_service.get(UNKNOWN_KEY), Some(&1));
    }
}
