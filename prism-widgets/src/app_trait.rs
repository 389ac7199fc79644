//! # PrismApp Trait - Plugin App Interface
//!
//! Standard interface for apps hosted by the Prism Studio shell.
//!
//! Makepad's `live_design!` macro resolves widget types at compile time, so
//! the shell still imports app widgets directly. This trait adds:
//!
//! - **Standardized metadata** via [`AppInfo`]
//! - **Consistent registration** via [`PrismApp::live_design`]
//!
//! ## Usage in Shell
//!
//! ```rust,ignore
//! use prism_widgets::PrismApp;
//! use prism_settings::PrismSettingsApp;
//!
//! impl LiveRegister for App {
//!     fn live_register(cx: &mut Cx) {
//!         makepad_widgets::live_design(cx);
//!         prism_widgets::live_design(cx);
//!         <PrismSettingsApp as PrismApp>::live_design(cx);
//!     }
//! }
//!
//! let info = PrismSettingsApp::info();
//! log::info!("Hosting {} ({})", info.name, info.id);
//! ```

use makepad_widgets::Cx;

/// Metadata about a registered app
#[derive(Clone, Debug, Default)]
pub struct AppInfo {
    /// Display name shown in UI
    pub name: &'static str,
    /// Unique identifier for the app
    pub id: &'static str,
    /// Description of the app
    pub description: &'static str,
}

/// Trait for apps that integrate with the Prism Studio shell
///
/// # Example
/// ```ignore
/// impl PrismApp for PrismSettingsApp {
///     fn info() -> AppInfo {
///         AppInfo {
///             name: "Preview Settings",
///             id: "prism-settings",
///             description: "Preview environment controls",
///         }
///     }
///
///     fn live_design(cx: &mut Cx) {
///         screen::live_design(cx);
///     }
/// }
/// ```
pub trait PrismApp {
    /// Returns metadata about this app
    fn info() -> AppInfo
    where
        Self: Sized;

    /// Register this app's widgets with Makepad
    fn live_design(cx: &mut Cx);
}

/// Trait for widgets that respond to global state changes
///
/// # Example
/// ```ignore
/// impl StateChangeListener for SettingsPanelRef {
///     fn on_dark_mode_change(&self, cx: &mut Cx, dark_mode: f64) {
///         if let Some(mut inner) = self.borrow_mut() {
///             inner.apply_dark_mode(cx, dark_mode);
///         }
///     }
/// }
/// ```
pub trait StateChangeListener {
    /// Called when the dark mode animation value changes
    ///
    /// # Arguments
    /// * `cx` - Makepad context for applying UI updates
    /// * `dark_mode` - Dark mode value (0.0 = light, 1.0 = dark)
    fn on_dark_mode_change(&self, cx: &mut Cx, dark_mode: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestApp;

    impl PrismApp for TestApp {
        fn info() -> AppInfo {
            AppInfo {
                name: "Test App",
                id: "test-app",
                description: "A test app for unit tests",
            }
        }

        fn live_design(_cx: &mut Cx) {}
    }

    #[test]
    fn test_app_info() {
        let info = TestApp::info();
        assert_eq!(info.id, "test-app");
        assert_eq!(info.name, "Test App");
    }

    #[test]
    fn test_app_info_default_is_empty() {
        let info = AppInfo::default();
        assert!(info.id.is_empty() && info.name.is_empty());
    }
}
