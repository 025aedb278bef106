//! Job records as received from upstream sources and in canonical form.
//!
//! Upstream providers (LinkedIn, Indeed, Google Jobs) disagree on field names
//! and on which fields they fill in. [`RawJobRecord`] accepts every variant;
//! [`normalize_job`] folds it into a [`NormalizedJob`].

pub mod filter;
pub mod lenient;
pub mod normalize;
pub mod resolve;
pub mod salary;

pub use filter::{SourceCounts, SourceFilter, filter_by_source};
pub use normalize::normalize_job;
pub use salary::{SalaryBand, format_currency};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A job record as returned by the aggregation API.
///
/// Every field is optional. `company`/`company_name`, `url`/`job_url` and
/// `remote`/`is_remote` are alternative spellings used by different sources.
/// A field of the wrong type decodes as `None` rather than rejecting the
/// record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawJobRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub job_url: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub source: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_remote: Option<bool>,
    #[serde(deserialize_with = "lenient::flag")]
    pub remote: Option<bool>,
    #[serde(deserialize_with = "lenient::string")]
    pub company_logo: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub date_posted: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub salary_source: Option<String>,
    #[serde(deserialize_with = "lenient::amount")]
    pub min_amount: Option<f64>,
    #[serde(deserialize_with = "lenient::amount")]
    pub max_amount: Option<f64>,
    #[serde(deserialize_with = "lenient::string")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub pay_period: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub job_type: Option<String>,
}

/// Canonical job representation handed to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub is_remote: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
}
