//! `catalog` command: print the businesses a session would see.

use tapreview_client::{source_for, FallbackCatalog};
use tapreview_core::{AppConfig, Catalog};

pub(crate) async fn run_catalog(config: &AppConfig, embedded: bool) -> anyhow::Result<()> {
    let catalog = if embedded {
        tapreview_core::embedded_catalog()
    } else {
        let client = tapreview_client::http_client(&config.user_agent, config.request_timeout_secs)?;
        FallbackCatalog::new(source_for(&config.catalog_url, client))
            .load_catalog()
            .await
    };
    print!("{}", format_catalog(&catalog));
    Ok(())
}

fn format_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (id, business) in catalog.iter() {
        let review = business.review_url().unwrap_or("-");
        out.push_str(&format!(
            "{id}\t{}\t{}\t{review}\n",
            business.name, business.business_type
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_catalog_lists_one_line_per_business() {
        let catalog = tapreview_core::embedded_catalog();
        let out = format_catalog(&catalog);
        assert_eq!(out.lines().count(), 6);
        assert!(out.contains(
            "bella-salon\tBella Hair & Beauty Salon\tHair Salon\thttps://g.page/r/CfDHMYAWNXHHEBM/review"
        ));
    }
}
