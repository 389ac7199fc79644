//! Prism Settings - preview environment panel
//!
//! A panel of controls bound to values owned by the host: color scheme,
//! locale, text size, layout direction and an accessibility flag, plus a
//! screenshot button that hides the panel while it captures.

pub mod capture;
pub mod data;
pub mod form;
pub mod layout;
pub mod platform;
pub mod screen;
pub mod services;

pub use capture::{CaptureError, CapturePhase, CaptureSequence, HapticFeedback, ScreenshotService, CAPTURE_DELAY};
pub use data::{project, Binding, ColorScheme, LayoutDirection, Locale, TextSize};
pub use form::{Control, ControlId, Interaction, SettingsForm, SettingsParams};
pub use layout::{WidthAligner, MIN_CONTROL_WIDTH};
pub use platform::{ParsePlatformError, Platform};
pub use screen::{SettingsPanelAction, SettingsPanelRef, SettingsPanelWidgetExt};
pub use services::{CaptureServices, CommandScreenshot, LogHaptics};

use makepad_widgets::Cx;
use prism_widgets::{AppInfo, PrismApp};

/// Prism Settings app descriptor
pub struct PrismSettingsApp;

impl PrismApp for PrismSettingsApp {
    fn info() -> AppInfo {
        AppInfo {
            name: form::TITLE,
            id: "prism-settings",
            description: "Preview environment controls",
        }
    }

    fn live_design(cx: &mut Cx) {
        screen::live_design(cx);
    }
}

/// Register all settings widgets with Makepad
pub fn live_design(cx: &mut Cx) {
    PrismSettingsApp::live_design(cx);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_info_matches_panel_title() {
        let info = PrismSettingsApp::info();
        assert_eq!(info.id, "prism-settings");
        assert_eq!(info.name, "Preview Settings");
    }
}
