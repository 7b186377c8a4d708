use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a search is loading.
pub struct LoadingIndicator {
    bar: ProgressBar,
}

impl LoadingIndicator {
    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn start(domain: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(format!("Checking {}...", domain));
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Hidden spinner, for output that is not a terminal.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
