//! Filtering normalized jobs by source provider.

use super::NormalizedJob;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Source providers a result list can be narrowed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceFilter {
    #[default]
    All,
    Linkedin,
    Indeed,
    Google,
}

impl SourceFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceFilter::All => "all",
            SourceFilter::Linkedin => "linkedin",
            SourceFilter::Indeed => "indeed",
            SourceFilter::Google => "google",
        }
    }

    /// Whether a job from `source` passes this filter. Case-insensitive.
    pub fn matches(self, source: &str) -> bool {
        match self {
            SourceFilter::All => true,
            other => source.eq_ignore_ascii_case(other.as_str()),
        }
    }
}

/// Jobs that pass `filter`, in their original order.
pub fn filter_by_source(jobs: &[NormalizedJob], filter: SourceFilter) -> Vec<NormalizedJob> {
    jobs.iter().filter(|job| filter.matches(&job.source)).cloned().collect()
}

/// Number of jobs per filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceCounts {
    pub all: usize,
    pub linkedin: usize,
    pub indeed: usize,
    pub google: usize,
}

impl SourceCounts {
    pub fn tally(jobs: &[NormalizedJob]) -> Self {
        let count = |filter: SourceFilter| jobs.iter().filter(|job| filter.matches(&job.source)).count();
        Self {
            all: jobs.len(),
            linkedin: count(SourceFilter::Linkedin),
            indeed: count(SourceFilter::Indeed),
            google: count(SourceFilter::Google),
        }
    }

    pub fn get(&self, filter: SourceFilter) -> usize {
        match filter {
            SourceFilter::All => self.all,
            SourceFilter::Linkedin => self.linkedin,
            SourceFilter::Indeed => self.indeed,
            SourceFilter::Google => self.google,
        }
    }
}
