//! Business identifier resolution from the tapped page URL.

use thiserror::Error;
use url::{form_urlencoded, Url};

use crate::business::{BusinessRecord, Catalog};

/// Query parameter carrying the business identifier.
pub const ID_PARAM: &str = "id";

/// Message shown in the error view when the identifier is unknown.
pub const NOT_FOUND_MESSAGE: &str = "Business not found";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("business not found: {id}")]
pub struct NotFound {
    pub id: String,
}

/// Extracts the `id` parameter from a page URL or a bare query string.
///
/// Only the query component is read; anything after `#` belongs to the
/// fragment. The first occurrence wins and is form-urlencoded decoded.
/// Returns `default_id` when the parameter is absent or empty.
#[must_use]
pub fn business_id_from_query(url_or_query: &str, default_id: &str) -> String {
    let query = page_query(url_or_query);

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == ID_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| default_id.to_string())
}

/// Query component of an absolute URL, or of a relative/bare query input.
fn page_query(url_or_query: &str) -> String {
    if let Ok(url) = Url::parse(url_or_query) {
        return url.query().unwrap_or_default().to_owned();
    }

    let without_fragment = url_or_query.split('#').next().unwrap_or_default();
    match without_fragment.split_once('?') {
        Some((_, query)) => query.to_owned(),
        None => without_fragment.to_owned(),
    }
}

/// Resolves the business for a tapped URL against a loaded catalog.
///
/// # Errors
///
/// Returns [`NotFound`] when the identifier has no exact match.
pub fn resolve(
    url_or_query: &str,
    default_id: &str,
    catalog: &Catalog,
) -> Result<BusinessRecord, NotFound> {
    let id = business_id_from_query(url_or_query, default_id);
    catalog.get(&id).cloned().ok_or(NotFound { id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::{embedded_catalog, DEMO_BUSINESS_ID};

    #[test]
    fn reads_id_from_full_url() {
        let id = business_id_from_query("https://tap.example/?id=bella-salon", DEMO_BUSINESS_ID);
        assert_eq!(id, "bella-salon");
    }

    #[test]
    fn reads_id_from_bare_query() {
        assert_eq!(business_id_from_query("ref=nfc&id=fitness-first", "x"), "fitness-first");
        assert_eq!(business_id_from_query("?id=fitness-first", "x"), "fitness-first");
    }

    #[test]
    fn absent_or_empty_id_uses_default() {
        assert_eq!(business_id_from_query("", DEMO_BUSINESS_ID), DEMO_BUSINESS_ID);
        assert_eq!(business_id_from_query("https://tap.example/", DEMO_BUSINESS_ID), DEMO_BUSINESS_ID);
        assert_eq!(business_id_from_query("?id=", DEMO_BUSINESS_ID), DEMO_BUSINESS_ID);
        assert_eq!(business_id_from_query("?identity=abc", DEMO_BUSINESS_ID), DEMO_BUSINESS_ID);
    }

    #[test]
    fn first_occurrence_wins_and_fragment_is_ignored() {
        assert_eq!(business_id_from_query("?id=one&id=two", "x"), "one");
        assert_eq!(business_id_from_query("?id=one#menu", "x"), "one");
    }

    #[test]
    fn fragment_query_is_not_the_page_query() {
        let id = business_id_from_query("https://tap.example/#/?id=bella-salon", DEMO_BUSINESS_ID);
        assert_eq!(id, DEMO_BUSINESS_ID);
        assert_eq!(business_id_from_query("#/?id=bella-salon", DEMO_BUSINESS_ID), DEMO_BUSINESS_ID);
        assert_eq!(
            business_id_from_query("https://tap.example/?id=fitness-first#/?id=bella-salon", "x"),
            "fitness-first"
        );
    }

    #[test]
    fn relative_page_url_reads_its_query() {
        assert_eq!(business_id_from_query("/tap?id=downtown-dental#top", "x"), "downtown-dental");
    }

    #[test]
    fn empty_first_id_is_treated_as_absent() {
        assert_eq!(business_id_from_query("?id=&id=two", DEMO_BUSINESS_ID), DEMO_BUSINESS_ID);
    }

    #[test]
    fn decodes_percent_and_plus() {
        assert_eq!(business_id_from_query("?id=caf%C3%A9+bar", "x"), "café bar");
    }

    #[test]
    fn resolve_hit_returns_record() {
        let catalog = embedded_catalog();
        let record = resolve("?id=quick-fix-auto", DEMO_BUSINESS_ID, &catalog).expect("known id");
        assert_eq!(record.name, "Quick Fix Auto Repair");
    }

    #[test]
    fn resolve_miss_is_not_found() {
        let catalog = embedded_catalog();
        let err = resolve("?id=Sunrise-Cafe", DEMO_BUSINESS_ID, &catalog).unwrap_err();
        assert_eq!(err.id, "Sunrise-Cafe");
    }
}
