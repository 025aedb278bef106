//! Job search request types and validation.

use super::JobsError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message returned when neither keywords nor a query were supplied.
pub const MISSING_FIELDS_MESSAGE: &str = "Keywords or query are required to fetch jobs.";

/// Search parameters for the jobs aggregation API.
///
/// Keywords drive the LinkedIn/Indeed scrapers and may be narrowed by
/// `location`; `query` is free text for Google Jobs. At least one of
/// `keywords` and `query` must be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Ordered keyword list.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Location filter, only sent alongside keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free-text query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl SearchRequest {
    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { keywords: keywords.into_iter().map(Into::into).collect(), ..Default::default() }
    }

    pub fn query(query: impl Into<String>) -> Self {
        Self { query: Some(query.into()), ..Default::default() }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    fn query_text(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }

    /// Reject requests that carry neither keywords nor a query.
    pub fn validate(&self) -> Result<(), JobsError> {
        if self.keywords.is_empty() && self.query_text().is_none() {
            return Err(JobsError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// JSON body sent to the API.
    ///
    /// Empty and inapplicable fields are left out entirely, which also keeps
    /// them out of the cache key.
    pub fn body(&self) -> Value {
        let mut body = Map::new();

        if !self.keywords.is_empty() {
            body.insert("keywords".into(), Value::from(self.keywords.clone()));
            if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
                body.insert("location".into(), Value::from(location));
            }
        }

        if let Some(query) = self.query_text() {
            body.insert("query".into(), Value::from(query));
        }

        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keywords_with_location() {
        let req = SearchRequest::keywords(["frontend"]).with_location("Lebanon");
        assert!(req.validate().is_ok());
        assert_eq!(req.body(), json!({"keywords": ["frontend"], "location": "Lebanon"}));
    }

    #[test]
    fn test_query_only() {
        let req = SearchRequest::query("rust developer remote");
        assert!(req.validate().is_ok());
        assert_eq!(req.body(), json!({"query": "rust developer remote"}));
    }

    #[test]
    fn test_location_dropped_without_keywords() {
        let req = SearchRequest::query("nurse").with_location("Beirut");
        assert_eq!(req.body(), json!({"query": "nurse"}));
    }

    #[test]
    fn test_both_keywords_and_query() {
        let req = SearchRequest { keywords: vec!["go".into()], location: None, query: Some("backend".into()) };
        assert!(req.validate().is_ok());
        assert_eq!(req.body(), json!({"keywords": ["go"], "query": "backend"}));
    }

    #[test]
    fn test_empty_request_rejected() {
        let err = SearchRequest::default().validate().unwrap_err();
        assert!(matches!(err, JobsError::Validation(ref msg) if msg == MISSING_FIELDS_MESSAGE));
    }

    #[test]
    fn test_empty_query_and_location_only_rejected() {
        let req = SearchRequest { keywords: vec![], location: Some("Lebanon".into()), query: Some(String::new()) };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_location_omitted() {
        let req = SearchRequest::keywords(["data"]).with_location("");
        assert_eq!(req.body(), json!({"keywords": ["data"]}));
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let req: SearchRequest = serde_json::from_str(r#"{"query": "chef"}"#).unwrap();
        assert!(req.keywords.is_empty());
        assert_eq!(req.query.as_deref(), Some("chef"));
    }
}
