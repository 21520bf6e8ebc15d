use std::sync::Mutex;

/// Where the customer is sent once the flow finishes.
pub trait Navigator: Send + Sync {
    fn open(&self, url: &str);
}

/// Keeps every requested URL instead of navigating.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs in the order they were opened. Empty if a writer panicked.
    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn open(&self, url: &str) {
        if let Ok(mut opened) = self.opened.lock() {
            opened.push(url.to_owned());
        }
    }
}

impl<T: Navigator + ?Sized> Navigator for std::sync::Arc<T> {
    fn open(&self, url: &str) {
        (**self).open(url);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn records_urls_in_order() {
        let nav = RecordingNavigator::new();
        nav.open("https://a.example");
        nav.open("https://b.example");
        assert_eq!(nav.opened(), vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn poisoned_recorder_does_not_panic() {
        let nav = Arc::new(RecordingNavigator::new());
        let writer = Arc::clone(&nav);
        let joined = std::thread::spawn(move || {
            let _guard = writer.opened.lock().unwrap();
            panic!("writer failed while holding the lock");
        })
        .join();
        assert!(joined.is_err());

        nav.open("https://ignored.example");
        assert!(nav.opened().is_empty());
    }
}
