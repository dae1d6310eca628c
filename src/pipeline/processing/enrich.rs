use serde::Serialize;

use crate::common::constants::DERIVED_FIELDS;
use crate::common::types::RawRecord;
use crate::pipeline::processing::normalize::{
    get_arrondissement, normalize_construction, normalize_service, ConstructionGroup,
};

/// A raw record carrying the derived fields used by the map and project pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    /// The record as fetched, minus any stale derived keys
    #[serde(flatten)]
    pub raw: RawRecord,
    #[serde(rename = "_arrondissement")]
    pub arrondissement: Option<String>,
    #[serde(rename = "_constructionGroup")]
    pub construction_group: Option<ConstructionGroup>,
    #[serde(rename = "_service")]
    pub service: Option<String>,
}

/// Trait for attaching derived fields to fetched records
pub trait Enricher {
    fn enrich(&self, record: &RawRecord) -> EnrichedRecord;

    /// Enrich a whole page sequence, preserving order
    fn enrich_all(&self, records: &[RawRecord]) -> Vec<EnrichedRecord> {
        records.iter().map(|record| self.enrich(record)).collect()
    }
}

/// Derives district, construction group and service from the raw fields
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultEnricher;

impl DefaultEnricher {
    pub fn new() -> Self {
        Self
    }
}

impl Enricher for DefaultEnricher {
    fn enrich(&self, record: &RawRecord) -> EnrichedRecord {
        let mut fields = record.fields().clone();
        for key in DERIVED_FIELDS {
            fields.remove(key);
        }
        let raw = RawRecord::new(fields);

        EnrichedRecord {
            arrondissement: get_arrondissement(&raw),
            construction_group: normalize_construction(raw.type_construction().as_deref()),
            service: normalize_service(raw.service().as_deref()),
            raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_enrich_attaches_derived_fields() {
        let raw = record(json!({
            "code_postal": "75115",
            "type_construction": "Rénovation des sanitaires",
            "service": "sla 715",
            "nom": "École élémentaire"
        }));

        let enriched = DefaultEnricher::new().enrich(&raw);

        assert_eq!(enriched.arrondissement.as_deref(), Some("15e"));
        assert_eq!(enriched.construction_group, Some(ConstructionGroup::Renovation));
        assert_eq!(enriched.service.as_deref(), Some("SLA 7/15"));
        assert_eq!(enriched.raw, raw);
    }

    #[test]
    fn test_enrich_missing_fields_are_null() {
        let enriched = DefaultEnricher::new().enrich(&record(json!({ "nom": "Gymnase" })));
        assert_eq!(enriched.arrondissement, None);
        assert_eq!(enriched.construction_group, None);
        assert_eq!(enriched.service, None);

        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(json["_arrondissement"], serde_json::Value::Null);
        assert_eq!(json["_constructionGroup"], serde_json::Value::Null);
        assert_eq!(json["_service"], serde_json::Value::Null);
        assert_eq!(json["nom"], "Gymnase");
    }

    #[test]
    fn test_enrich_is_idempotent() {
        let enricher = DefaultEnricher::new();
        let raw = record(json!({
            "code_postal": "75001",
            "type_construction": "Ravalement",
            "service": "SE"
        }));

        let first = enricher.enrich(&raw);
        let reread: RawRecord = serde_json::from_value(serde_json::to_value(&first).unwrap()).unwrap();
        let second = enricher.enrich(&reread);

        assert_eq!(first, second);
    }

    #[test]
    fn test_stale_derived_keys_are_replaced() {
        let raw = record(json!({ "code_postal": "75004", "_arrondissement": "bogus" }));
        let enriched = DefaultEnricher::new().enrich(&raw);

        assert!(enriched.raw.get("_arrondissement").is_none());
        let json = serde_json::to_string(&enriched).unwrap();
        assert_eq!(json.matches("_arrondissement").count(), 1);
        assert!(json.contains("\"_arrondissement\":\"4e\""));
    }

    #[test]
    fn test_enrich_all_preserves_order() {
        let records = vec![
            record(json!({ "code_postal": "75003" })),
            record(json!({ "code_postal": "75001" })),
            record(json!({ "code_postal": "75002" })),
        ];
        let enriched = DefaultEnricher::new().enrich_all(&records);
        let districts: Vec<_> = enriched.iter().map(|r| r.arrondissement.as_deref()).collect();
        assert_eq!(districts, vec![Some("3e"), Some("1er"), Some("2e")]);
    }
}
