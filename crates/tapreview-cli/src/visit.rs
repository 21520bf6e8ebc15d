//! `visit` command: drive one tap session end to end from the terminal.

use tapreview_client::{
    source_for, AckPolicy, FallbackCatalog, Navigator, ReviewSession, WebhookSink, WelcomeGate,
    WelcomeSequencer, WelcomeTimings,
};
use tapreview_core::{AppConfig, DisplayState};

use crate::render::{render_outcome, render_view, render_welcome};

pub(crate) struct VisitInput {
    pub url: String,
    pub name: String,
    pub email: String,
    pub consent: bool,
    pub skip_intro: bool,
}

/// Logs the review URL instead of opening a browser. The outcome line
/// printed after the last view carries it to stdout.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn open(&self, url: &str) {
        tracing::info!(url, "redirecting to review page");
    }
}

/// Runs a session and reports the outcome. A failed submission is reported
/// to the user, not returned as an error.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be constructed.
pub(crate) async fn run_visit(config: &AppConfig, input: VisitInput) -> anyhow::Result<()> {
    let client = tapreview_client::http_client(&config.user_agent, config.request_timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;
    let catalog = FallbackCatalog::new(source_for(&config.catalog_url, client.clone()));
    let sink = WebhookSink::new(
        client,
        &config.webhook_url,
        AckPolicy::from_flag(config.webhook_require_ack),
    );
    let mut session = ReviewSession::new(catalog, sink, TerminalNavigator, &config.user_agent)
        .with_default_business_id(&config.default_business_id);

    let mut views = session.subscribe();
    let renderer = tokio::spawn(async move {
        while views.changed().await.is_ok() {
            let view = views.borrow_and_update().clone();
            println!("{}", render_view(&view));
        }
    });

    let gate = if input.skip_intro {
        WelcomeGate::open()
    } else {
        let (gate, _handle) = WelcomeSequencer::new(WelcomeTimings::STANDARD).spawn();
        let mut stages = gate.subscribe();
        tokio::spawn(async move {
            loop {
                let stage = *stages.borrow_and_update();
                if let Some(line) = render_welcome(stage) {
                    println!("{line}");
                }
                if stages.changed().await.is_err() {
                    break;
                }
            }
        });
        gate
    };

    if session.open(&input.url, gate).await != DisplayState::Main {
        drop(session);
        renderer.await.ok();
        return Ok(());
    }

    session.input_name(&input.name);
    session.input_email(&input.email);
    session.set_consent(input.consent);

    let outcome = session.submit().await;

    // Every published view is printed before the outcome that follows it.
    drop(session);
    renderer.await.ok();
    if let Some(line) = render_outcome(&outcome) {
        println!("{line}");
    }
    Ok(())
}
