//! Host platform capability query

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Platform class the panel runs on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Desktop,
    Mobile,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown platform `{0}` (expected `desktop` or `mobile`)")]
pub struct ParsePlatformError(String);

impl Platform {
    /// Platform class of the running build
    pub fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "android")) {
            Platform::Mobile
        } else {
            Platform::Desktop
        }
    }

    pub fn is_desktop_class(self) -> bool {
        self == Platform::Desktop
    }

    /// Desktop hosts have their own capture tools, so the in-panel
    /// screenshot button is offered on mobile only
    pub fn screenshot_available(self) -> bool {
        !self.is_desktop_class()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Desktop => "desktop",
            Platform::Mobile => "mobile",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Platform::Desktop),
            "mobile" => Ok(Platform::Mobile),
            other => Err(ParsePlatformError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screenshot_only_off_desktop() {
        assert!(!Platform::Desktop.screenshot_available());
        assert!(Platform::Mobile.screenshot_available());
    }

    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    #[test]
    fn test_current_is_desktop_on_desktop_targets() {
        assert!(Platform::current().is_desktop_class());
    }

    #[test]
    fn test_parse() {
        assert_eq!("desktop".parse::<Platform>(), Ok(Platform::Desktop));
        assert_eq!(" Mobile ".parse::<Platform>(), Ok(Platform::Mobile));
        assert!("tablet".parse::<Platform>().is_err());
        assert_eq!(Platform::Mobile.to_string(), "mobile");
    }
}
