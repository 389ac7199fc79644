//! Default screenshot and haptic collaborators for desktop hosts

use crate::capture::{CaptureError, HapticFeedback, ScreenshotService};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// Screenshot via the platform's command-line capture tool.
///
/// The output file name is appended as the tool's last argument.
#[derive(Clone, Debug)]
pub struct CommandScreenshot {
    program: Option<String>,
    args: Vec<String>,
    output_dir: PathBuf,
}

impl CommandScreenshot {
    /// Use the default tool for this OS, writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        const QUIET: &[&str] = &["-x"];
        const NONE: &[&str] = &[];
        let (program, args) = if cfg!(target_os = "macos") {
            (Some("screencapture"), QUIET)
        } else if cfg!(target_os = "linux") {
            (Some("grim"), NONE)
        } else {
            (None, NONE)
        };

        Self {
            program: program.map(str::to_string),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            output_dir: output_dir.into(),
        }
    }

    /// Replace the capture tool
    pub fn with_program(mut self, program: impl Into<String>, args: &[&str]) -> Self {
        self.program = Some(program.into());
        self.args = args.iter().map(|arg| arg.to_string()).collect();
        self
    }

    /// Pictures directory, falling back to home and then the working directory
    pub fn default_output_dir() -> PathBuf {
        dirs::picture_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn next_output_path(&self) -> PathBuf {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        self.output_dir.join(format!("prism-{}.png", millis))
    }
}

impl Default for CommandScreenshot {
    fn default() -> Self {
        Self::new(Self::default_output_dir())
    }
}

impl ScreenshotService for CommandScreenshot {
    fn capture(&self) -> Result<PathBuf, CaptureError> {
        let program = self.program.as_deref().ok_or(CaptureError::NoTool)?;

        std::fs::create_dir_all(&self.output_dir).map_err(|source| CaptureError::Directory {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.next_output_path();
        log::debug!("running {} {:?} {}", program, self.args, path.display());

        let status = Command::new(program)
            .args(&self.args)
            .arg(&path)
            .status()
            .map_err(|source| CaptureError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(CaptureError::ToolFailed { status });
        }
        if !path.exists() {
            return Err(CaptureError::MissingOutput(path));
        }
        Ok(path)
    }
}

/// Desktop hosts have no tactile engine, so cues go to the log
#[derive(Clone, Copy, Debug, Default)]
pub struct LogHaptics;

impl HapticFeedback for LogHaptics {
    fn success(&self) {
        log::info!("haptic: success");
    }

    fn failure(&self) {
        log::warn!("haptic: error");
    }
}

/// Collaborators the panel calls when a capture runs
pub struct CaptureServices {
    pub screenshot: Box<dyn ScreenshotService>,
    pub haptics: Box<dyn HapticFeedback>,
}

impl CaptureServices {
    pub fn new(screenshot: impl ScreenshotService + 'static, haptics: impl HapticFeedback + 'static) -> Self {
        Self {
            screenshot: Box::new(screenshot),
            haptics: Box::new(haptics),
        }
    }
}

impl Default for CaptureServices {
    fn default() -> Self {
        Self::new(CommandScreenshot::default(), LogHaptics)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_capture_writes_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("shots");
        let service = CommandScreenshot::new(&out).with_program("touch", &[]);

        let path = service.capture().unwrap();
        assert!(path.exists());
        assert_eq!(path.parent(), Some(out.as_path()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("prism-") && name.ends_with(".png"), "{}", name);
    }

    #[test]
    fn test_failing_tool() {
        let dir = tempfile::tempdir().unwrap();
        let service = CommandScreenshot::new(dir.path()).with_program("false", &[]);
        assert!(matches!(service.capture(), Err(CaptureError::ToolFailed { .. })));
    }

    #[test]
    fn test_tool_that_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let service = CommandScreenshot::new(dir.path()).with_program("true", &[]);
        assert!(matches!(service.capture(), Err(CaptureError::MissingOutput(_))));
    }

    #[test]
    fn test_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let service =
            CommandScreenshot::new(dir.path()).with_program("prism-no-such-screenshot-tool", &[]);
        assert!(matches!(service.capture(), Err(CaptureError::Spawn { .. })));
    }
}
