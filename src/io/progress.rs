//! Generation progress display

use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner narrating generation attempts
///
/// Generation retries whole attempts on recoverable failures, so the
/// display tracks attempts rather than inner correction rounds, whose count
/// is unknown up front.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create and start the spinner
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ATTEMPT_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Announce a generation attempt
    pub fn start_attempt(&self, attempt: usize, max_attempts: usize) {
        self.bar
            .set_message(format!("hiding message (attempt {attempt}/{max_attempts})"));
    }

    /// Stop the spinner after a successful generation
    pub fn finish(&self, width: usize, height: usize) {
        self.bar
            .finish_with_message(format!("maze ready ({width}x{height})"));
    }

    /// Stop the spinner after a failed generation
    pub fn abandon(&self) {
        self.bar.abandon_with_message("generation failed");
    }
}
