//! Field resolution for heterogeneous job records.
//!
//! Each resolver lists its candidate fields in precedence order; the first one
//! present wins, otherwise the placeholder applies. A field counts as present
//! whenever the source sent it, even if it is an empty string.

use super::RawJobRecord;

pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const UNKNOWN_LOCATION: &str = "Location not specified";
pub const UNKNOWN_SOURCE: &str = "unknown";
pub const PLACEHOLDER_URL: &str = "#";

/// First present candidate, in order.
fn first_present<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates.iter().find_map(|c| c.as_deref())
}

/// `company_name`, then `company`.
pub fn resolve_company(raw: &RawJobRecord) -> &str {
    first_present(&[&raw.company_name, &raw.company]).unwrap_or(UNKNOWN_COMPANY)
}

/// `job_url`, then `url`.
pub fn resolve_url(raw: &RawJobRecord) -> &str {
    first_present(&[&raw.job_url, &raw.url]).unwrap_or(PLACEHOLDER_URL)
}

/// `is_remote`, then `remote`.
pub fn resolve_is_remote(raw: &RawJobRecord) -> bool {
    raw.is_remote.or(raw.remote).unwrap_or(false)
}

pub fn resolve_source(raw: &RawJobRecord) -> &str {
    first_present(&[&raw.source]).unwrap_or(UNKNOWN_SOURCE)
}

pub fn resolve_location(raw: &RawJobRecord) -> &str {
    first_present(&[&raw.location]).unwrap_or(UNKNOWN_LOCATION)
}

pub fn resolve_description(raw: &RawJobRecord) -> &str {
    first_present(&[&raw.description]).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawJobRecord {
        RawJobRecord::default()
    }

    #[test]
    fn test_company_precedence() {
        let both = RawJobRecord { company_name: Some("Acme".into()), company: Some("Other".into()), ..raw() };
        assert_eq!(resolve_company(&both), "Acme");

        let fallback = RawJobRecord { company: Some("Other".into()), ..raw() };
        assert_eq!(resolve_company(&fallback), "Other");

        assert_eq!(resolve_company(&raw()), UNKNOWN_COMPANY);
    }

    #[test]
    fn test_empty_company_name_still_wins() {
        let record = RawJobRecord { company_name: Some(String::new()), company: Some("Other".into()), ..raw() };
        assert_eq!(resolve_company(&record), "");
    }

    #[test]
    fn test_url_precedence() {
        let both = RawJobRecord { job_url: Some("https://a".into()), url: Some("https://b".into()), ..raw() };
        assert_eq!(resolve_url(&both), "https://a");

        let fallback = RawJobRecord { url: Some("https://b".into()), ..raw() };
        assert_eq!(resolve_url(&fallback), "https://b");

        assert_eq!(resolve_url(&raw()), "#");
    }

    #[test]
    fn test_remote_precedence() {
        let both = RawJobRecord { is_remote: Some(false), remote: Some(true), ..raw() };
        assert!(!resolve_is_remote(&both));

        let fallback = RawJobRecord { remote: Some(true), ..raw() };
        assert!(resolve_is_remote(&fallback));

        assert!(!resolve_is_remote(&raw()));
    }

    #[test]
    fn test_placeholders() {
        let record = raw();
        assert_eq!(resolve_source(&record), "unknown");
        assert_eq!(resolve_location(&record), "Location not specified");
        assert_eq!(resolve_description(&record), "");
    }
}
