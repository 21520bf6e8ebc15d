//! Intro sequence shown right after the tap.
//!
//! The sequence runs once on its own task. Business data is not displayed
//! until [`WelcomeGate::wait`] returns, so the intro is never cut short by a
//! fast catalog load.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeStage {
    Greeting,
    Preparing,
    FadingOut,
    Revealed,
}

impl WelcomeStage {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            WelcomeStage::Greeting => "Welcome!",
            WelcomeStage::Preparing | WelcomeStage::FadingOut | WelcomeStage::Revealed => {
                "Thank you for tapping!"
            }
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            WelcomeStage::Greeting => "Getting things ready...",
            WelcomeStage::Preparing | WelcomeStage::FadingOut | WelcomeStage::Revealed => {
                "Preparing your personalized experience..."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeTimings {
    pub greeting: Duration,
    pub preparing: Duration,
    pub fade_out: Duration,
}

impl WelcomeTimings {
    pub const STANDARD: Self = Self {
        greeting: Duration::from_millis(800),
        preparing: Duration::from_millis(2200),
        fade_out: Duration::from_millis(800),
    };

    pub const IMMEDIATE: Self = Self {
        greeting: Duration::ZERO,
        preparing: Duration::ZERO,
        fade_out: Duration::ZERO,
    };

    #[must_use]
    pub fn total(&self) -> Duration {
        self.greeting + self.preparing + self.fade_out
    }
}

impl Default for WelcomeTimings {
    fn default() -> Self {
        Self::STANDARD
    }
}

pub struct WelcomeSequencer {
    timings: WelcomeTimings,
}

impl WelcomeSequencer {
    #[must_use]
    pub fn new(timings: WelcomeTimings) -> Self {
        Self { timings }
    }

    /// Starts the sequence on a new task and returns the gate that opens
    /// when it reaches [`WelcomeStage::Revealed`].
    #[must_use]
    pub fn spawn(self) -> (WelcomeGate, JoinHandle<()>) {
        let (tx, rx) = watch::channel(WelcomeStage::Greeting);
        let handle = tokio::spawn(self.run(tx));
        (WelcomeGate { rx }, handle)
    }

    async fn run(self, tx: watch::Sender<WelcomeStage>) {
        let timings = self.timings;
        tokio::time::sleep(timings.greeting).await;
        tx.send_replace(WelcomeStage::Preparing);
        tokio::time::sleep(timings.preparing).await;
        tx.send_replace(WelcomeStage::FadingOut);
        tokio::time::sleep(timings.fade_out).await;
        tx.send_replace(WelcomeStage::Revealed);
        tracing::debug!("welcome sequence finished");
    }
}

/// One-shot completion signal for the welcome sequence.
#[derive(Debug, Clone)]
pub struct WelcomeGate {
    rx: watch::Receiver<WelcomeStage>,
}

impl WelcomeGate {
    /// A gate that is already open, for sessions that skip the intro.
    #[must_use]
    pub fn open() -> Self {
        let (_tx, rx) = watch::channel(WelcomeStage::Revealed);
        Self { rx }
    }

    #[must_use]
    pub fn stage(&self) -> WelcomeStage {
        *self.rx.borrow()
    }

    /// Receiver for renderers that animate each stage.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<WelcomeStage> {
        self.rx.clone()
    }

    /// Resolves once the intro has been revealed. If the sequence task is
    /// gone before that, the gate opens anyway.
    pub async fn wait(mut self) {
        if self
            .rx
            .wait_for(|stage| *stage == WelcomeStage::Revealed)
            .await
            .is_err()
        {
            tracing::warn!("welcome sequence ended before reveal; continuing");
        }
    }
}
