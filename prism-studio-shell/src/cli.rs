//! Command-line interface for Prism Studio
//!
//! # Usage
//!
//! ```bash
//! # Show help
//! prism-studio --help
//!
//! # Start dark, offering three locales
//! prism-studio --dark-mode --locales en,ru,fr --locale ru
//!
//! # Simulate a mobile host so the screenshot button is enabled
//! prism-studio --platform mobile --screenshot-dir /tmp/shots
//!
//! # Set log level
//! prism-studio --log-level debug
//! ```

use clap::Parser;
use prism_settings::{Locale, Platform};
use std::path::PathBuf;

/// Prism Studio - preview environment playground
///
/// Renders sample content under a chosen color scheme, locale, text size,
/// layout direction and accessibility setting, with a settings panel to
/// switch between them.
#[derive(Parser, Debug, Clone)]
#[command(name = "prism-studio")]
#[command(version)]
#[command(about = "Preview environment playground", long_about = None)]
pub struct Args {
    /// Start in dark mode
    ///
    /// Overrides the saved color scheme for this run.
    #[arg(long)]
    pub dark_mode: bool,

    /// Locales offered by the locale picker, comma separated
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["en", "ru", "fr", "de", "ar", "ja"],
        value_name = "IDS"
    )]
    pub locales: Vec<String>,

    /// Locale to start with (overrides the saved one)
    #[arg(long, value_name = "ID")]
    pub locale: Option<String>,

    /// Platform class to simulate: desktop or mobile
    ///
    /// Defaults to the class of the running build. The screenshot button is
    /// only enabled on mobile.
    #[arg(long, value_name = "CLASS")]
    pub platform: Option<Platform>,

    /// Directory screenshots are written to
    ///
    /// Defaults to the user's pictures directory.
    #[arg(long, value_name = "DIR")]
    pub screenshot_dir: Option<PathBuf>,

    /// Log level for output
    ///
    /// Controls the verbosity of log output. Available levels:
    /// error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// Window width in pixels
    #[arg(long, default_value = "1100", value_name = "PIXELS")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "720", value_name = "PIXELS")]
    pub height: u32,

    /// Do not load or save preferences
    #[arg(long)]
    pub no_persist: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            dark_mode: false,
            locales: ["en", "ru", "fr", "de", "ar", "ja"]
                .iter()
                .map(|id| id.to_string())
                .collect(),
            locale: None,
            platform: None,
            screenshot_dir: None,
            log_level: "info".to_string(),
            width: 1100,
            height: 720,
            no_persist: false,
        }
    }
}

impl Args {
    /// Get log level as env_logger filter string
    pub fn log_filter(&self) -> &str {
        match self.log_level.to_lowercase().as_str() {
            "error" => "error",
            "warn" | "warning" => "warn",
            "info" => "info",
            "debug" => "debug",
            "trace" => "trace",
            _ => "info",
        }
    }

    /// Picker locales with blanks and duplicates removed; never empty
    pub fn locale_list(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = Vec::new();
        for id in self.locales.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
            let locale = Locale::from(id);
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        if locales.is_empty() {
            locales.push(Locale::default());
        }
        locales
    }

    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = Args::default();
        assert!(!args.dark_mode);
        assert_eq!(args.log_level, "info");
        assert_eq!(args.width, 1100);
        assert_eq!(args.height, 720);
        assert_eq!(args.locale_list().len(), 6);
        assert!(!args.no_persist);
    }

    #[test]
    fn test_parsed_defaults_match_default_impl() {
        let parsed = Args::parse_from(["prism-studio"]);
        let default = Args::default();
        assert_eq!(parsed.locales, default.locales);
        assert_eq!(parsed.width, default.width);
        assert_eq!(parsed.log_level, default.log_level);
    }

    #[test]
    fn test_log_filter() {
        let mut args = Args::default();

        args.log_level = "debug".to_string();
        assert_eq!(args.log_filter(), "debug");

        args.log_level = "WARNING".to_string();
        assert_eq!(args.log_filter(), "warn");

        args.log_level = "invalid".to_string();
        assert_eq!(args.log_filter(), "info");
    }

    #[test]
    fn test_locales_flag() {
        let args = Args::parse_from(["prism-studio", "--locales", "en, ru,,fr,en", "--locale", "ru"]);
        let ids: Vec<String> = args.locale_list().iter().map(|l| l.to_string()).collect();
        assert_eq!(ids, vec!["en", "ru", "fr"]);
        assert_eq!(args.locale.as_deref(), Some("ru"));
    }

    #[test]
    fn test_empty_locales_fall_back() {
        let mut args = Args::default();
        args.locales = vec![" ".to_string()];
        assert_eq!(args.locale_list(), vec![Locale::from("en")]);
    }

    #[test]
    fn test_platform_flag() {
        let args = Args::parse_from(["prism-studio", "--platform", "mobile"]);
        assert_eq!(args.platform(), Platform::Mobile);
        assert!(Args::try_parse_from(["prism-studio", "--platform", "tv"]).is_err());
    }
}
