use async_trait::async_trait;
use serde_json::Value;

use crate::common::error::Result;

/// Capability to GET a URL and decode its body as JSON.
///
/// The pagination loop only depends on this port, so tests can feed it canned
/// pages and the binary can plug in the reqwest adapter.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}
