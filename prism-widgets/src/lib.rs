//! Prism Widgets - shared theme, app interface and setting controls
//!
//! Call [`live_design`] from the app's `LiveRegister` before registering any
//! widget that uses `prism_widgets::theme::*`.

pub mod app_trait;
pub mod setting_picker;
pub mod setting_toggle;
pub mod step_slider;
pub mod theme;

pub use app_trait::{AppInfo, PrismApp, StateChangeListener};
pub use setting_picker::{
    SettingPicker, SettingPickerAction, SettingPickerRef, SettingPickerWidgetExt,
};
pub use setting_toggle::{
    SettingToggle, SettingToggleAction, SettingToggleRef, SettingToggleWidgetExt,
};
pub use step_slider::{StepSlider, StepSliderAction, StepSliderRef, StepSliderWidgetExt};

use makepad_widgets::Cx;

/// Register theme constants and shared controls with Makepad
pub fn live_design(cx: &mut Cx) {
    theme::live_design(cx);
    setting_toggle::live_design(cx);
    step_slider::live_design(cx);
    setting_picker::live_design(cx);
}
