use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner on stderr that counts station lines as they are read.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new_spinner(message: &str, silent: bool) -> Self {
        if silent {
            return Self::silent();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{pos} lines]")
        {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            progress_bar: Some(pb),
        }
    }

    pub fn silent() -> Self {
        Self { progress_bar: None }
    }

    pub fn increment(&self, delta: u64) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(delta);
        }
    }

    pub fn position(&self) -> u64 {
        self.progress_bar.as_ref().map_or(0, |pb| pb.position())
    }

    pub fn finish_with_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            if !pb.is_finished() {
                pb.finish_and_clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reporter_is_inert() {
        let progress = ProgressReporter::new_spinner("Reading stations...", true);
        progress.increment(10);
        progress.finish_with_message("done");
        assert_eq!(progress.position(), 0);
    }

    #[test]
    fn test_spinner_counts_lines() {
        let progress = ProgressReporter::new_spinner("Reading stations...", false);
        progress.increment(1);
        progress.increment(2);
        assert_eq!(progress.position(), 3);
        progress.finish_with_message("done");
    }
}
