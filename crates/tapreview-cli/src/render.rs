//! Plain-text rendering of session views for the terminal.

use tapreview_client::{SubmitOutcome, WelcomeStage};
use tapreview_core::DisplayView;

pub(crate) fn render_welcome(stage: WelcomeStage) -> Option<String> {
    match stage {
        WelcomeStage::Greeting | WelcomeStage::Preparing => {
            Some(format!("{} {}", stage.title(), stage.subtitle()))
        }
        WelcomeStage::FadingOut | WelcomeStage::Revealed => None,
    }
}

pub(crate) fn render_view(view: &DisplayView) -> String {
    match view {
        DisplayView::Loading => "[loading]".to_string(),
        DisplayView::Main(main) => {
            let mut lines = vec![
                format!("[main] {}", main.headline),
                format!("  {}", main.subheadline),
                format!("  logo: {}", main.logo.src),
            ];
            for link in main.social.visible() {
                lines.push(format!("  {}: {}", link.platform, link.href));
            }
            if let Some(e) = &main.name_error {
                lines.push(format!("  name: {e}"));
            }
            if let Some(e) = &main.email_error {
                lines.push(format!("  email: {e}"));
            }
            lines.push(format!("  [{}]", main.submit.label()));
            lines.join("\n")
        }
        DisplayView::Error { message } => format!("[error] {message}"),
        DisplayView::Success { message } => format!("[success] {message}"),
    }
}

pub(crate) fn render_outcome(outcome: &SubmitOutcome) -> Option<String> {
    match outcome {
        SubmitOutcome::Ignored => None,
        SubmitOutcome::Invalid => Some("form not submitted: fix the errors above".to_string()),
        SubmitOutcome::Failed { alert } => Some(format!("alert: {alert}")),
        SubmitOutcome::Submitted {
            redirected_to: Some(url),
        } => Some(format!("-> opening review page: {url}")),
        SubmitOutcome::Submitted { redirected_to: None } => {
            Some("no review page configured for this business".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use tapreview_core::{embedded_catalog, MainView};

    use super::*;

    #[test]
    fn renders_main_view_with_visible_links_only() {
        let catalog = embedded_catalog();
        let business = catalog.get("downtown-dental").expect("present");
        let view = DisplayView::Main(Box::new(MainView::for_business(business)));
        let out = render_view(&view);
        assert!(out.starts_with("[main] Thank you for visiting Downtown Dental Care!"));
        assert!(out.contains("facebook: https://facebook.com/downtowndental"));
        assert!(!out.contains("instagram"));
        assert!(out.ends_with("[Continue to Review]"));
    }

    #[test]
    fn renders_error_view() {
        let view = DisplayView::Error {
            message: "Business not found".to_string(),
        };
        assert_eq!(render_view(&view), "[error] Business not found");
    }

    #[test]
    fn welcome_is_silent_once_revealed() {
        assert!(render_welcome(WelcomeStage::Preparing).is_some());
        assert!(render_welcome(WelcomeStage::Revealed).is_none());
    }

    #[test]
    fn outcome_lines() {
        assert_eq!(render_outcome(&SubmitOutcome::Ignored), None);
        assert_eq!(
            render_outcome(&SubmitOutcome::Failed { alert: "try again" }).as_deref(),
            Some("alert: try again")
        );
        let redirected = SubmitOutcome::Submitted {
            redirected_to: Some("https://g.page/r/x/review".to_string()),
        };
        assert_eq!(
            render_outcome(&redirected).as_deref(),
            Some("-> opening review page: https://g.page/r/x/review")
        );
    }
}
