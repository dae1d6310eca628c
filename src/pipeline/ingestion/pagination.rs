use tracing::{debug, info, instrument, warn};

use crate::app::ports::JsonSource;
use crate::common::error::{Result, ScraperError};
use crate::common::types::{RawRecord, RecordsPage};

/// Everything gathered by one full pagination run
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub records: Vec<RawRecord>,
    pub pages_fetched: usize,
    /// Last `total_count` reported by the API, if any page carried one
    pub total_count: Option<u64>,
}

pub fn page_url(base_url: &str, limit: usize, offset: usize) -> String {
    format!("{base_url}?limit={limit}&offset={offset}")
}

/// Walks the records endpoint page by page and concatenates the results.
///
/// Stops on an empty page or once the accumulated count reaches the reported
/// `total_count`. Any failure aborts the walk and nothing fetched so far is
/// returned.
#[instrument(skip(source))]
pub async fn fetch_all<S>(source: &S, base_url: &str, limit: usize) -> Result<FetchOutcome>
where
    S: JsonSource + ?Sized,
{
    if limit == 0 {
        return Err(ScraperError::Config("page limit must be greater than zero".to_string()));
    }

    let mut outcome = FetchOutcome::default();
    let mut offset = 0;

    loop {
        let url = page_url(base_url, limit, offset);
        debug!(offset, "Fetching page");
        let body = source.get_json(&url).await?;
        outcome.pages_fetched += 1;

        let page: RecordsPage = serde_json::from_value(body)?;
        match page.total_count {
            Some(total) => outcome.total_count = Some(total),
            None => warn!(offset, "Page has no total_count, paging until an empty page"),
        }

        let results = match page.results {
            Some(results) if !results.is_empty() => results,
            _ => {
                debug!(offset, "Empty page, stopping");
                break;
            }
        };
        debug!(offset, count = results.len(), "Received page");
        outcome.records.extend(results);

        if let Some(total) = page.total_count {
            if outcome.records.len() as u64 >= total {
                break;
            }
        }
        offset += limit;
    }

    info!(
        records = outcome.records.len(),
        pages = outcome.pages_fetched,
        "Fetched all records"
    );
    Ok(outcome)
}
