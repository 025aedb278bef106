//! Raw record to canonical job conversion.

use super::resolve::{
    resolve_company, resolve_description, resolve_is_remote, resolve_location, resolve_source, resolve_url,
};
use super::{NormalizedJob, RawJobRecord, SalaryBand};

/// Normalize a raw upstream record.
///
/// Total over every input: missing fields fall back to placeholders, and the
/// genuinely optional ones (logo, date, salary, job type) stay `None`.
pub fn normalize_job(raw: &RawJobRecord) -> NormalizedJob {
    NormalizedJob {
        id: raw.id.clone().unwrap_or_default(),
        title: raw.title.clone().unwrap_or_default(),
        company: resolve_company(raw).to_string(),
        location: resolve_location(raw).to_string(),
        description: resolve_description(raw).to_string(),
        url: resolve_url(raw).to_string(),
        source: resolve_source(raw).to_string(),
        is_remote: resolve_is_remote(raw),
        company_logo: raw.company_logo.clone(),
        date_posted: raw.date_posted.clone(),
        salary: SalaryBand::from_raw(raw).map(|band| band.to_string()),
        job_type: raw.job_type.clone(),
    }
}

impl From<&RawJobRecord> for NormalizedJob {
    fn from(raw: &RawJobRecord) -> Self {
        normalize_job(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKEDIN_JSON: &str = r#"{
        "id": "1",
        "title": "Engineer",
        "company_name": "Acme",
        "job_url": "https://x",
        "is_remote": true,
        "source": "linkedin"
    }"#;

    #[test]
    fn test_normalize_linkedin_shape() {
        let raw: RawJobRecord = serde_json::from_str(LINKEDIN_JSON).unwrap();
        let job = normalize_job(&raw);

        assert_eq!(
            job,
            NormalizedJob {
                id: "1".into(),
                title: "Engineer".into(),
                company: "Acme".into(),
                location: "Location not specified".into(),
                description: String::new(),
                url: "https://x".into(),
                source: "linkedin".into(),
                is_remote: true,
                company_logo: None,
                date_posted: None,
                salary: None,
                job_type: None,
            }
        );
    }

    #[test]
    fn test_normalize_alternate_field_names() {
        let json = r#"{
            "id": "g-7",
            "title": "Designer",
            "company": "Globex",
            "url": "https://globex.example/jobs/7",
            "remote": true,
            "source": "google",
            "location": "Beirut",
            "description": "Design things",
            "company_logo": "https://globex.example/logo.png",
            "date_posted": "2024-05-01",
            "job_type": "fulltime"
        }"#;
        let raw: RawJobRecord = serde_json::from_str(json).unwrap();
        let job = normalize_job(&raw);

        assert_eq!(job.company, "Globex");
        assert_eq!(job.url, "https://globex.example/jobs/7");
        assert!(job.is_remote);
        assert_eq!(job.location, "Beirut");
        assert_eq!(job.description, "Design things");
        assert_eq!(job.company_logo.as_deref(), Some("https://globex.example/logo.png"));
        assert_eq!(job.date_posted.as_deref(), Some("2024-05-01"));
        assert_eq!(job.job_type.as_deref(), Some("fulltime"));
    }

    #[test]
    fn test_normalize_salary() {
        let json = r#"{
            "id": "2",
            "title": "Analyst",
            "min_amount": 50000,
            "max_amount": 70000,
            "currency": "USD",
            "pay_period": "YEARLY"
        }"#;
        let raw: RawJobRecord = serde_json::from_str(json).unwrap();
        assert_eq!(normalize_job(&raw).salary.as_deref(), Some("$50,000 – $70,000 / yearly"));
    }

    #[test]
    fn test_normalize_empty_record() {
        let raw: RawJobRecord = serde_json::from_str("{}").unwrap();
        let job = normalize_job(&raw);

        assert_eq!(job.id, "");
        assert_eq!(job.company, "Unknown Company");
        assert_eq!(job.url, "#");
        assert_eq!(job.source, "unknown");
        assert!(!job.is_remote);
        assert!(job.salary.is_none());
    }

    #[test]
    fn test_normalize_ignores_unknown_and_null_fields() {
        let json = r#"{"id": "3", "title": null, "emails": ["a@b.c"], "company": null, "company_name": "Initech"}"#;
        let raw: RawJobRecord = serde_json::from_str(json).unwrap();
        let job = normalize_job(&raw);
        assert_eq!(job.title, "");
        assert_eq!(job.company, "Initech");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw: RawJobRecord = serde_json::from_str(LINKEDIN_JSON).unwrap();
        assert_eq!(normalize_job(&raw), normalize_job(&raw));
        assert_eq!(NormalizedJob::from(&raw), normalize_job(&raw));
    }

    #[test]
    fn test_serialized_field_names() {
        let raw: RawJobRecord = serde_json::from_str(LINKEDIN_JSON).unwrap();
        let value = serde_json::to_value(normalize_job(&raw)).unwrap();

        assert_eq!(value["isRemote"], true);
        assert!(value.get("companyLogo").is_none());
        assert!(value.get("salary").is_none());
    }
}
