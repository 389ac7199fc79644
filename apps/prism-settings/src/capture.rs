//! Screenshot capture sequence
//!
//! Pressing the screenshot button hides the panel, waits [`CAPTURE_DELAY`]
//! so the hidden state reaches the screen, captures, plays a haptic cue for
//! the outcome and shows the panel again:
//!
//! ```text
//! Idle -> Hiding -> Capturing -> Restoring -> Idle
//! ```
//!
//! The delay itself is owned by the caller (a UI timer). [`CaptureSequence`]
//! only tracks the phase and runs the synchronous steps on either side of it.

use crate::data::Binding;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Time between hiding the panel and taking the capture
pub const CAPTURE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("a screenshot is already in progress")]
    Busy,

    #[error("no screenshot tool is available on this platform")]
    NoTool,

    #[error("cannot create screenshot directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("screenshot tool exited with {status}")]
    ToolFailed { status: ExitStatus },

    #[error("screenshot tool finished but {0} was not written")]
    MissingOutput(PathBuf),
}

/// Platform screenshot mechanism
pub trait ScreenshotService {
    /// Capture the screen, returning where the image was written
    fn capture(&self) -> Result<PathBuf, CaptureError>;
}

/// Fire-and-forget tactile cues
pub trait HapticFeedback {
    fn success(&self);
    fn failure(&self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapturePhase {
    #[default]
    Idle,
    /// Panel hidden, waiting for the delay to elapse
    Hiding,
    Capturing,
    Restoring,
}

#[derive(Debug, Default)]
pub struct CaptureSequence {
    phase: CapturePhase,
}

impl CaptureSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase != CapturePhase::Idle
    }

    /// Hide the panel and return how long to wait before [`complete`].
    ///
    /// Fails with [`CaptureError::Busy`] if a sequence is already running;
    /// the running one is left untouched.
    ///
    /// [`complete`]: CaptureSequence::complete
    pub fn begin(&mut self, hidden: &Binding<bool>) -> Result<Duration, CaptureError> {
        if self.is_in_flight() {
            log::debug!("screenshot requested while {:?}", self.phase);
            return Err(CaptureError::Busy);
        }
        hidden.set(true);
        self.phase = CapturePhase::Hiding;
        log::debug!("panel hidden, capturing in {:?}", CAPTURE_DELAY);
        Ok(CAPTURE_DELAY)
    }

    /// Run the capture once the delay has elapsed, then restore the panel.
    ///
    /// Returns whether the capture succeeded, or `None` if no sequence was
    /// waiting (a stray timer event).
    pub fn complete(
        &mut self,
        hidden: &Binding<bool>,
        screenshot: &dyn ScreenshotService,
        haptics: &dyn HapticFeedback,
    ) -> Option<bool> {
        if self.phase != CapturePhase::Hiding {
            return None;
        }

        self.phase = CapturePhase::Capturing;
        let result = screenshot.capture();

        self.phase = CapturePhase::Restoring;
        let succeeded = match result {
            Ok(path) => {
                log::info!("screenshot saved to {}", path.display());
                haptics.success();
                true
            }
            Err(e) => {
                log::warn!("screenshot failed: {}", e);
                haptics.failure();
                false
            }
        };

        hidden.set(false);
        self.phase = CapturePhase::Idle;
        Some(succeeded)
    }
}
