// Pipeline ingestion: paginated retrieval of raw records

pub mod pagination;
