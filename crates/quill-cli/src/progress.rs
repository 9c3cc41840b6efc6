use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::GlobalFlags;

/// Spinner shown on stderr while a generation call is in flight.
///
/// Hidden when stderr is not a terminal or `--quiet` is set, so piped
/// output stays clean.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(flags: &GlobalFlags, message: &str) -> Self {
        if flags.quiet || !std::io::stderr().is_terminal() {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }

    /// Clear on success, leave an error line on failure.
    pub fn finish<T, E>(&self, result: &Result<T, E>, failure: &str) {
        match result {
            Ok(_) => self.finish_clear(),
            Err(_) => self.finish_err(failure),
        }
    }
}
