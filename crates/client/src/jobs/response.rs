//! Jobs API response types.

use chrono::{DateTime, Utc};
use jobscraper_core::jobs::{SourceCounts, SourceFilter, filter_by_source};
use jobscraper_core::{NormalizedJob, RawJobRecord, normalize_job};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw response body from the jobs API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobsResponse {
    pub message: String,
    pub total_jobs: u64,
    #[serde(deserialize_with = "records")]
    pub jobs: Vec<RawJobRecord>,
}

/// Decode each job on its own so one malformed record cannot sink the rest.
///
/// A record that is not an object at all becomes an empty record.
fn records<'de, D>(deserializer: D) -> Result<Vec<RawJobRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            RawJobRecord::deserialize(value).unwrap_or_else(|e| {
                tracing::warn!(index, error = %e, "malformed job record, using defaults");
                RawJobRecord::default()
            })
        })
        .collect())
}

/// A completed search with normalized jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub message: String,
    pub total_jobs: u64,
    pub jobs: Vec<NormalizedJob>,
    pub cache_hit: bool,
    pub elapsed_ms: u64,
    pub completed_at: DateTime<Utc>,
}

impl SearchOutcome {
    pub fn from_response(response: &JobsResponse, cache_hit: bool, elapsed_ms: u64) -> Self {
        Self {
            message: response.message.clone(),
            total_jobs: response.total_jobs,
            jobs: response.jobs.iter().map(normalize_job).collect(),
            cache_hit,
            elapsed_ms,
            completed_at: Utc::now(),
        }
    }

    /// Per-source job counts.
    pub fn counts(&self) -> SourceCounts {
        SourceCounts::tally(&self.jobs)
    }

    /// Jobs from the given source.
    pub fn filtered(&self, filter: SourceFilter) -> Vec<NormalizedJob> {
        filter_by_source(&self.jobs, filter)
    }
}
