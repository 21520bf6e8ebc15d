use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Copy shown under the headline when a business has no description.
pub const DEFAULT_DESCRIPTION: &str = "Your feedback helps us improve and serve you better";

/// Profile of the business a tag belongs to, as it appears in the catalog JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Free-text category; only used to pick a default logo.
    #[serde(rename = "type", default)]
    pub business_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_review_url: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social_media: BTreeMap<String, String>,
}

impl BusinessRecord {
    /// Description, or the generic copy when it is absent or empty.
    #[must_use]
    pub fn description_or_default(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(DEFAULT_DESCRIPTION)
    }

    #[must_use]
    pub fn logo_url(&self) -> Option<&str> {
        non_empty(self.logo.as_deref())
    }

    /// Redirect target after a successful submission, if one is set.
    #[must_use]
    pub fn review_url(&self) -> Option<&str> {
        non_empty(self.google_review_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Social platforms the page has a slot for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Website,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Website,
    ];

    /// Key used for this platform in a record's `socialMedia` map.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Website => "website",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Identifier → business mapping, from either the remote source or the
/// embedded table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, BusinessRecord>",
    into = "BTreeMap<String, BusinessRecord>"
)]
pub struct Catalog {
    businesses: BTreeMap<String, BusinessRecord>,
}

impl Catalog {
    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BusinessRecord> {
        self.businesses.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BusinessRecord)> {
        self.businesses.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<BTreeMap<String, BusinessRecord>> for Catalog {
    /// Records without an `id` take their map key.
    fn from(mut businesses: BTreeMap<String, BusinessRecord>) -> Self {
        for (key, record) in &mut businesses {
            if record.id.is_empty() {
                record.id.clone_from(key);
            }
        }
        Self { businesses }
    }
}

impl From<Catalog> for BTreeMap<String, BusinessRecord> {
    fn from(catalog: Catalog) -> Self {
        catalog.businesses
    }
}

impl FromIterator<BusinessRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = BusinessRecord>>(iter: I) -> Self {
        let businesses = iter.into_iter().map(|b| (b.id.clone(), b)).collect();
        Self { businesses }
    }
}
