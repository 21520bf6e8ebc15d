//! Display state machine and the view-model it publishes.
//!
//! Exactly one region is visible at a time. Renderers bind a [`DisplayView`]
//! to concrete UI; nothing here knows about elements or styling.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::business::{BusinessRecord, SocialPlatform};
use crate::fallback::default_logo;
use crate::validation::FormState;

pub const SUBMIT_LABEL: &str = "Continue to Review";
pub const SUBMITTING_LABEL: &str = "Submitting...";
/// Browsing context for visible social links.
pub const SOCIAL_LINK_TARGET: &str = "_blank";
pub const SOCIAL_LINK_REL: &str = "noopener noreferrer";
const HIDDEN_HREF: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayState {
    Loading,
    Main,
    Error,
    Success,
}

impl DisplayState {
    /// `loading → main | error`, `main → main | error | success`.
    /// `error` and `success` are terminal.
    #[must_use]
    pub fn can_transition_to(self, next: DisplayState) -> bool {
        use DisplayState::{Error, Loading, Main, Success};
        matches!(
            (self, next),
            (Loading, Main | Error) | (Main, Main | Error | Success)
        )
    }
}

impl std::fmt::Display for DisplayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayState::Loading => write!(f, "loading"),
            DisplayState::Main => write!(f, "main"),
            DisplayState::Error => write!(f, "error"),
            DisplayState::Success => write!(f, "success"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal display transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: DisplayState,
    pub to: DisplayState,
}

/// The form's submit button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitControl {
    #[default]
    Ready,
    Submitting,
}

impl SubmitControl {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SubmitControl::Ready => SUBMIT_LABEL,
            SubmitControl::Submitting => SUBMITTING_LABEL,
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == SubmitControl::Ready
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoView {
    pub src: String,
    pub alt: String,
    fallback: &'static str,
}

impl LogoView {
    #[must_use]
    pub fn for_business(business: &BusinessRecord) -> Self {
        let fallback = default_logo(&business.business_type);
        Self {
            src: business.logo_url().unwrap_or(fallback).to_string(),
            alt: format!("{} Logo", business.name),
            fallback,
        }
    }

    /// Swaps to the category default after the image failed to load.
    pub fn load_failed(&mut self) {
        if self.src != self.fallback {
            self.fallback.clone_into(&mut self.src);
        }
    }

    #[must_use]
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub href: String,
    pub visible: bool,
    /// Set only while visible.
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
}

impl SocialLink {
    fn hidden(platform: SocialPlatform) -> Self {
        Self {
            platform,
            href: HIDDEN_HREF.to_string(),
            visible: false,
            target: None,
            rel: None,
        }
    }

    fn show(&mut self, url: &str) {
        url.clone_into(&mut self.href);
        self.visible = true;
        self.target = Some(SOCIAL_LINK_TARGET);
        self.rel = Some(SOCIAL_LINK_REL);
    }
}

/// One slot per supported platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLinks {
    links: Vec<SocialLink>,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            links: SocialPlatform::ALL.into_iter().map(SocialLink::hidden).collect(),
        }
    }
}

impl SocialLinks {
    /// Hides every slot, then shows the ones with a non-empty URL.
    /// Platforms without a slot are ignored.
    pub fn populate(&mut self, social_media: &BTreeMap<String, String>) {
        for link in &mut self.links {
            *link = SocialLink::hidden(link.platform);
        }
        for (key, url) in social_media {
            let Some(platform) = SocialPlatform::from_key(key) else {
                continue;
            };
            if url.trim().is_empty() {
                continue;
            }
            if let Some(link) = self.links.iter_mut().find(|l| l.platform == platform) {
                link.show(url);
            }
        }
    }

    /// # Panics
    ///
    /// Never: every platform has a slot.
    #[must_use]
    pub fn get(&self, platform: SocialPlatform) -> &SocialLink {
        self.links
            .iter()
            .find(|l| l.platform == platform)
            .expect("every platform has a slot")
    }

    pub fn visible(&self) -> impl Iterator<Item = &SocialLink> {
        self.links.iter().filter(|l| l.visible)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SocialLink> {
        self.links.iter()
    }
}

/// Content of the main card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainView {
    pub business_id: String,
    pub headline: String,
    pub subheadline: String,
    pub logo: LogoView,
    pub social: SocialLinks,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub submit: SubmitControl,
}

impl MainView {
    #[must_use]
    pub fn for_business(business: &BusinessRecord) -> Self {
        let mut social = SocialLinks::default();
        social.populate(&business.social_media);
        Self {
            business_id: business.id.clone(),
            headline: format!("Thank you for visiting {}!", business.name),
            subheadline: business.description_or_default().to_string(),
            logo: LogoView::for_business(business),
            social,
            name_error: None,
            email_error: None,
            submit: SubmitControl::Ready,
        }
    }

    /// Copies the form's inline errors into the view.
    pub fn sync_form(&mut self, form: &FormState) {
        self.name_error = form.name_error().map(|e| e.to_string());
        self.email_error = form.email_error().map(|e| e.to_string());
    }
}

#[must_use]
pub fn success_message(business_name: &str) -> String {
    format!("Thank you for visiting {business_name}! Your feedback helps us serve you better.")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayView {
    Loading,
    Main(Box<MainView>),
    Error { message: String },
    Success { message: String },
}

impl DisplayView {
    #[must_use]
    pub fn state(&self) -> DisplayState {
        match self {
            DisplayView::Loading => DisplayState::Loading,
            DisplayView::Main(_) => DisplayState::Main,
            DisplayView::Error { .. } => DisplayState::Error,
            DisplayView::Success { .. } => DisplayState::Success,
        }
    }
}

/// Owns the visible view and rejects transitions the flow never makes.
#[derive(Debug, Clone)]
pub struct DisplayMachine {
    view: DisplayView,
}

impl Default for DisplayMachine {
    fn default() -> Self {
        Self {
            view: DisplayView::Loading,
        }
    }
}

impl DisplayMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn view(&self) -> &DisplayView {
        &self.view
    }

    #[must_use]
    pub fn state(&self) -> DisplayState {
        self.view.state()
    }

    /// Mutable access to the main card while it is showing.
    pub fn main_mut(&mut self) -> Option<&mut MainView> {
        match &mut self.view {
            DisplayView::Main(main) => Some(&mut **main),
            _ => None,
        }
    }

    /// # Errors
    ///
    /// [`TransitionError`] unless currently loading or showing main content.
    pub fn show_main(&mut self, main: MainView) -> Result<(), TransitionError> {
        self.transition(DisplayView::Main(Box::new(main)))
    }

    /// # Errors
    ///
    /// [`TransitionError`] from `error` or `success`.
    pub fn show_error(&mut self, message: impl Into<String>) -> Result<(), TransitionError> {
        self.transition(DisplayView::Error {
            message: message.into(),
        })
    }

    /// # Errors
    ///
    /// [`TransitionError`] unless currently showing main content.
    pub fn show_success(&mut self, message: impl Into<String>) -> Result<(), TransitionError> {
        self.transition(DisplayView::Success {
            message: message.into(),
        })
    }

    fn transition(&mut self, next: DisplayView) -> Result<(), TransitionError> {
        let from = self.state();
        let to = next.state();
        if !from.can_transition_to(to) {
            return Err(TransitionError { from, to });
        }
        self.view = next;
        Ok(())
    }
}

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;
