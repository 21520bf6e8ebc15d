//! One tap session: welcome gate, business resolution, the customer form,
//! submission, and the closing redirect.
//!
//! The session owns the current business and the display machine. Every
//! change to the visible view is published on a watch channel so a renderer
//! can follow along without reaching into the session.

use std::time::Duration;

use chrono::Utc;
use tapreview_core::{
    resolve, success_message, BusinessRecord, DisplayMachine, DisplayState, DisplayView,
    FormState, MainView, SubmissionRecord, SubmitControl, TransitionError, DEMO_BUSINESS_ID,
    NOT_FOUND_MESSAGE,
};
use tokio::sync::watch;

use crate::catalog::CatalogSource;
use crate::navigator::Navigator;
use crate::sink::SubmissionSink;
use crate::welcome::WelcomeGate;

/// Blocking alert shown when the sink cannot be reached.
pub const SUBMISSION_ALERT: &str =
    "There was an error submitting your information. Please try again.";

/// Error view message when no catalog could be loaded at all.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load business information";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimings {
    /// Pause after a successful dispatch before showing success.
    pub submit_min_delay: Duration,
    /// Pause on the success view before redirecting.
    pub redirect_delay: Duration,
}

impl SessionTimings {
    pub const STANDARD: Self = Self {
        submit_min_delay: Duration::from_millis(1000),
        redirect_delay: Duration::from_millis(3000),
    };

    pub const IMMEDIATE: Self = Self {
        submit_min_delay: Duration::ZERO,
        redirect_delay: Duration::ZERO,
    };
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form is not on screen.
    Ignored,
    /// At least one field failed validation; nothing was sent.
    Invalid,
    /// The sink could not be reached; the submit control is ready again.
    Failed { alert: &'static str },
    Submitted { redirected_to: Option<String> },
}

pub struct ReviewSession<C, S, N> {
    catalog: C,
    sink: S,
    navigator: N,
    timings: SessionTimings,
    default_business_id: String,
    user_agent: String,
    business: Option<BusinessRecord>,
    form: FormState,
    display: DisplayMachine,
    view_tx: watch::Sender<DisplayView>,
}

impl<C, S, N> ReviewSession<C, S, N>
where
    C: CatalogSource,
    S: SubmissionSink,
    N: Navigator,
{
    #[must_use]
    pub fn new(catalog: C, sink: S, navigator: N, user_agent: &str) -> Self {
        let display = DisplayMachine::new();
        let (view_tx, _) = watch::channel(display.view().clone());
        Self {
            catalog,
            sink,
            navigator,
            timings: SessionTimings::STANDARD,
            default_business_id: DEMO_BUSINESS_ID.to_string(),
            user_agent: user_agent.to_owned(),
            business: None,
            form: FormState::default(),
            display,
            view_tx,
        }
    }

    #[must_use]
    pub fn with_timings(mut self, timings: SessionTimings) -> Self {
        self.timings = timings;
        self
    }

    #[must_use]
    pub fn with_default_business_id(mut self, id: &str) -> Self {
        id.clone_into(&mut self.default_business_id);
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplayView> {
        self.view_tx.subscribe()
    }

    pub fn view(&self) -> &DisplayView {
        self.display.view()
    }

    pub fn state(&self) -> DisplayState {
        self.display.state()
    }

    pub fn business(&self) -> Option<&BusinessRecord> {
        self.business.as_ref()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Waits for the intro, loads the catalog, and shows either the
    /// business or the error view.
    pub async fn open(&mut self, page_url: &str, gate: WelcomeGate) -> DisplayState {
        gate.wait().await;

        let catalog = match self.catalog.load().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!(source = %self.catalog.describe(), error = %e, "no catalog available");
                let result = self.display.show_error(LOAD_FAILED_MESSAGE);
                self.commit(result);
                return self.state();
            }
        };

        match resolve(page_url, &self.default_business_id, &catalog) {
            Ok(business) => {
                tracing::info!(business_id = %business.id, "resolved business");
                let result = self.display_business(business);
                self.commit(result);
            }
            Err(not_found) => {
                tracing::warn!(business_id = %not_found.id, "business not in catalog");
                let result = self.display.show_error(NOT_FOUND_MESSAGE);
                self.commit(result);
            }
        }
        self.state()
    }

    /// Makes `business` current and rebuilds the main card from it. Safe to
    /// call again with another record; nothing from the previous one stays.
    ///
    /// # Errors
    ///
    /// [`TransitionError`] once the session has reached `error` or `success`.
    pub fn display_business(&mut self, business: BusinessRecord) -> Result<(), TransitionError> {
        let mut main = MainView::for_business(&business);
        main.sync_form(&self.form);
        self.display.show_main(main)?;
        self.business = Some(business);
        self.publish();
        Ok(())
    }

    pub fn input_name(&mut self, value: &str) {
        self.form.input_name(value);
        self.sync_form();
    }

    pub fn blur_name(&mut self) -> bool {
        let valid = self.form.blur_name();
        self.sync_form();
        valid
    }

    pub fn input_email(&mut self, value: &str) {
        self.form.input_email(value);
        self.sync_form();
    }

    pub fn blur_email(&mut self) -> bool {
        let valid = self.form.blur_email();
        self.sync_form();
        valid
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.form.set_consent(consent);
    }

    /// The logo image failed to load; show the category default instead.
    pub fn logo_failed(&mut self) {
        if let Some(main) = self.display.main_mut() {
            main.logo.load_failed();
            self.publish();
        }
    }

    /// Validates, sends the submission, shows success, and redirects to the
    /// review page after the configured delay.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state() != DisplayState::Main {
            return SubmitOutcome::Ignored;
        }
        let Some(business) = self.business.clone() else {
            return SubmitOutcome::Ignored;
        };

        let Some(validated) = self.form.validate_for_submit() else {
            self.sync_form();
            return SubmitOutcome::Invalid;
        };
        self.sync_form();
        self.set_submit_control(SubmitControl::Submitting);

        let record = SubmissionRecord::new(&business, validated, &self.user_agent, Utc::now());
        if let Err(e) = self.sink.submit(&record).await {
            tracing::error!(business_id = %business.id, error = %e, "submission failed");
            self.set_submit_control(SubmitControl::Ready);
            return SubmitOutcome::Failed {
                alert: SUBMISSION_ALERT,
            };
        }
        tokio::time::sleep(self.timings.submit_min_delay).await;

        tracing::info!(
            business_id = %business.id,
            marketing_consent = record.marketing_consent(),
            "submission accepted"
        );
        let result = self.display.show_success(success_message(&business.name));
        self.commit(result);

        tokio::time::sleep(self.timings.redirect_delay).await;
        let redirected_to = business.review_url().map(str::to_owned);
        match &redirected_to {
            Some(url) => {
                tracing::info!(business_id = %business.id, url = %url, "redirecting to review page");
                self.navigator.open(url);
            }
            None => {
                tracing::info!(business_id = %business.id, "no review URL; staying on success view");
            }
        }
        SubmitOutcome::Submitted { redirected_to }
    }

    fn set_submit_control(&mut self, control: SubmitControl) {
        if let Some(main) = self.display.main_mut() {
            main.submit = control;
            self.publish();
        }
    }

    fn sync_form(&mut self) {
        if let Some(main) = self.display.main_mut() {
            main.sync_form(&self.form);
            self.publish();
        }
    }

    fn commit(&mut self, result: Result<(), TransitionError>) {
        match result {
            Ok(()) => self.publish(),
            Err(e) => tracing::error!(error = %e, "display transition rejected"),
        }
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.display.view().clone());
    }
}
