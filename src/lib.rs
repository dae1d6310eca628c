pub mod app;
pub mod common;
pub mod config;
pub mod infra;
pub mod logging;
pub mod pipeline;

pub use common::error::{Result, ScraperError};
pub use common::types::{GeoPoint, RawRecord};
pub use pipeline::processing::display::{format_budget, satellite_url, sector_color};
pub use pipeline::processing::enrich::{DefaultEnricher, EnrichedRecord, Enricher};
pub use pipeline::processing::normalize::{
    get_arrondissement, normalize_construction, normalize_service, ConstructionGroup,
};
pub use pipeline::{Pipeline, PipelineResult, Summary};
