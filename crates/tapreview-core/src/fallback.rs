//! Embedded demo catalog and per-category default imagery.
//!
//! The embedded table has the same shape as the remote catalog and is what
//! a session shows whenever the remote source cannot be loaded.

use std::collections::BTreeMap;

use crate::business::{BusinessRecord, Catalog};

/// Business shown when the page URL carries no `id` parameter.
pub const DEMO_BUSINESS_ID: &str = "sunrise-cafe";

const GENERIC_LOGO: &str =
    "https://images.unsplash.com/photo-1486312338219-ce68e2c6b696?w=200&h=200&fit=crop&crop=center";

const CATEGORY_LOGOS: &[(&str, &str)] = &[
    (
        "Coffee Shop",
        "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=200&h=200&fit=crop&crop=center",
    ),
    (
        "Auto Repair",
        "https://images.unsplash.com/photo-1486754735734-325b5831c3ad?w=200&h=200&fit=crop&crop=center",
    ),
    (
        "Hair Salon",
        "https://images.unsplash.com/photo-1560066984-138dadb4c035?w=200&h=200&fit=crop&crop=center",
    ),
    (
        "Fitness Center",
        "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=200&h=200&fit=crop&crop=center",
    ),
    (
        "Dental Office",
        "https://images.unsplash.com/photo-1629909613654-28e377c37b09?w=200&h=200&fit=crop&crop=center",
    ),
];

/// Default logo for a business category, or the generic image when the
/// category is not recognized. Matching is exact.
#[must_use]
pub fn default_logo(business_type: &str) -> &'static str {
    CATEGORY_LOGOS
        .iter()
        .find(|(category, _)| *category == business_type)
        .map_or(GENERIC_LOGO, |(_, url)| *url)
}

struct Seed {
    id: &'static str,
    name: &'static str,
    business_type: &'static str,
    description: &'static str,
    logo: &'static str,
    review_url: &'static str,
    social: &'static [(&'static str, &'static str)],
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "sunrise-cafe",
        name: "Sunrise Coffee & Bakery",
        business_type: "Coffee Shop",
        description: "Artisanal coffee and fresh baked goods since 2015",
        logo: "https://images.unsplash.com/photo-1447933601403-0c6688de566e?w=200&h=200&fit=crop&crop=center",
        review_url: "https://g.page/r/CfDHMYAWNXHHEBM/review",
        social: &[
            ("facebook", "https://facebook.com/sunrisecoffee"),
            ("instagram", "https://instagram.com/sunrisecoffee"),
            ("website", "https://sunrisecoffee.com"),
        ],
    },
    Seed {
        id: "artisan-brew-house",
        name: "Artisan Brew House",
        business_type: "Coffee Shop",
        description: "Specialty single-origin coffee and handcrafted pastries in downtown since 2018",
        logo: "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=200&h=200&fit=crop&crop=center",
        review_url: "https://g.page/r/CaRtIsAnBrEwHoUsE/review",
        social: &[
            ("facebook", "https://facebook.com/artisanbrewhouse"),
            ("instagram", "https://instagram.com/artisanbrewhouse"),
            ("website", "https://artisanbrewhouse.com"),
        ],
    },
    Seed {
        id: "quick-fix-auto",
        name: "Quick Fix Auto Repair",
        business_type: "Auto Repair",
        description: "Professional automotive service and repair",
        logo: "https://images.unsplash.com/photo-1486754735734-325b5831c3ad?w=200&h=200&fit=crop&crop=center",
        review_url: "https://www.youtube.com",
        social: &[
            ("facebook", "https://facebook.com/quickfixauto"),
            ("instagram", "https://instagram.com/quickfixauto"),
            ("website", "https://creaticomsolutions.com"),
        ],
    },
    Seed {
        id: "bella-salon",
        name: "Bella Hair & Beauty Salon",
        business_type: "Hair Salon",
        description: "Premium hair styling and beauty treatments",
        logo: "https://images.unsplash.com/photo-1560066984-138dadb4c035?w=200&h=200&fit=crop&crop=center",
        review_url: "https://g.page/r/CfDHMYAWNXHHEBM/review",
        social: &[
            ("instagram", "https://instagram.com/bellasalon"),
            ("website", "https://bellasalon.com"),
        ],
    },
    Seed {
        id: "fitness-first",
        name: "Fitness First Gym",
        business_type: "Fitness Center",
        description: "24/7 fitness center with personal training",
        logo: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=200&h=200&fit=crop&crop=center",
        review_url: "https://g.page/r/CfDHMYAWNXHHEBM/review",
        social: &[
            ("facebook", "https://facebook.com/fitnessfirstgym"),
            ("instagram", "https://instagram.com/fitnessfirst"),
            ("website", "https://fitnessfirst.com"),
        ],
    },
    Seed {
        id: "downtown-dental",
        name: "Downtown Dental Care",
        business_type: "Dental Office",
        description: "Comprehensive dental care for the whole family",
        logo: "https://images.unsplash.com/photo-1629909613654-28e377c37b09?w=200&h=200&fit=crop&crop=center",
        review_url: "https://g.page/r/CfDHMYAWNXHHEBM/review",
        social: &[
            ("facebook", "https://facebook.com/downtowndental"),
            ("website", "https://downtowndental.com"),
        ],
    },
];

fn seed_record(seed: &Seed) -> BusinessRecord {
    BusinessRecord {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        business_type: seed.business_type.to_string(),
        description: Some(seed.description.to_string()),
        logo: Some(seed.logo.to_string()),
        google_review_url: Some(seed.review_url.to_string()),
        social_media: seed
            .social
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// The built-in demo catalog.
#[must_use]
pub fn embedded_catalog() -> Catalog {
    SEEDS.iter().map(seed_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_contains_demo_business() {
        let catalog = embedded_catalog();
        assert_eq!(catalog.len(), 6);
        let demo = catalog.get(DEMO_BUSINESS_ID).expect("demo id present");
        assert_eq!(demo.name, "Sunrise Coffee & Bakery");
    }

    #[test]
    fn embedded_ids_match_their_keys() {
        for (key, record) in embedded_catalog().iter() {
            assert_eq!(key, record.id);
        }
    }

    #[test]
    fn default_logo_by_category() {
        assert!(default_logo("Hair Salon").contains("photo-1560066984"));
        assert!(default_logo("Dental Office").contains("photo-1629909613654"));
    }

    #[test]
    fn default_logo_unknown_category_is_generic() {
        assert_eq!(default_logo("Bookshop"), GENERIC_LOGO);
        assert_eq!(default_logo(""), GENERIC_LOGO);
        assert_eq!(default_logo("coffee shop"), GENERIC_LOGO);
    }
}
