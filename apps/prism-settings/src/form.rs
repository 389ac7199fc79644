//! Settings form model
//!
//! Turns [`SettingsParams`] into the ordered list of controls the panel
//! shows and applies user interactions back through the bindings. Nothing
//! here depends on a running UI context, so the panel's behaviour is tested
//! against this module directly.

use crate::data::{Binding, ColorScheme, LayoutDirection, Locale, TextSize};
use crate::platform::Platform;
use parking_lot::Mutex;
use std::sync::Arc;

pub const TITLE: &str = "Preview Settings";
pub const THEME_LABEL: &str = "Dark theme";
pub const LOCALE_LABEL: &str = "Locale";
pub const TEXT_SIZE_LABEL: &str = "Text size";
pub const DIRECTION_LABEL: &str = "Right-to-left";
pub const ACCESSIBILITY_LABEL: &str = "Accessibility";
pub const SCREENSHOT_LABEL: &str = "Take screenshot";

/// Values the panel edits, all owned by the caller
#[derive(Clone, Debug)]
pub struct SettingsParams {
    /// Locales offered by the picker, in display order
    pub locales: Vec<Locale>,
    pub locale: Binding<Locale>,
    pub color_scheme: Binding<ColorScheme>,
    pub text_size: Binding<TextSize>,
    pub layout_direction: Binding<LayoutDirection>,
    pub accessibility_enabled: Binding<bool>,
}

impl SettingsParams {
    /// Params backed by fresh values nobody else sees.
    ///
    /// Used until a host configures the panel, and in tests.
    pub fn standalone(locales: Vec<Locale>) -> Self {
        let locale = locales.first().cloned().unwrap_or_default();
        Self {
            locales,
            locale: Binding::from_shared(Arc::new(Mutex::new(locale))),
            color_scheme: Binding::from_shared(Arc::new(Mutex::new(ColorScheme::default()))),
            text_size: Binding::from_shared(Arc::new(Mutex::new(TextSize::default()))),
            layout_direction: Binding::from_shared(Arc::new(Mutex::new(LayoutDirection::default()))),
            accessibility_enabled: Binding::from_shared(Arc::new(Mutex::new(false))),
        }
    }

    /// Theme toggle view of `color_scheme` (on = dark)
    pub fn dark_theme(&self) -> Binding<bool> {
        self.color_scheme.clone().map(ColorScheme::is_dark, |on| {
            if on {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            }
        })
    }

    /// Direction toggle view of `layout_direction` (on = right-to-left)
    pub fn right_to_left(&self) -> Binding<bool> {
        self.layout_direction.clone().map(LayoutDirection::is_right_to_left, |on| {
            if on {
                LayoutDirection::RightToLeft
            } else {
                LayoutDirection::LeftToRight
            }
        })
    }

    /// Slider view of `text_size`
    pub fn text_size_position(&self) -> Binding<f64> {
        self.text_size.clone().map(TextSize::position, TextSize::from_position)
    }

    /// The picker needs at least two entries to offer a choice
    pub fn locale_picker_enabled(&self) -> bool {
        self.locales.len() >= 2
    }

    /// Index of the bound locale in `locales`, if it is listed
    pub fn selected_locale_index(&self) -> Option<usize> {
        let current = self.locale.get();
        self.locales.iter().position(|locale| *locale == current)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlId {
    Title,
    Divider,
    Theme,
    Locale,
    TextSize,
    LayoutDirection,
    Accessibility,
    Screenshot,
}

/// One rendered row of the panel
#[derive(Clone, Debug, PartialEq)]
pub enum Control {
    Title {
        text: &'static str,
    },
    Divider,
    Toggle {
        id: ControlId,
        label: &'static str,
        on: bool,
    },
    Picker {
        id: ControlId,
        label: &'static str,
        /// Offered locales, followed by the bound identifier when it is not
        /// among them
        options: Vec<String>,
        /// Index into the offered locales; `None` when the bound locale is
        /// unlisted and shown as the trailing extra row
        selected: Option<usize>,
        enabled: bool,
    },
    Slider {
        id: ControlId,
        label: &'static str,
        value: f64,
        min: f64,
        max: f64,
        step: f64,
        value_text: String,
    },
    Button {
        id: ControlId,
        label: &'static str,
        enabled: bool,
    },
}

impl Control {
    pub fn id(&self) -> ControlId {
        match self {
            Control::Title { .. } => ControlId::Title,
            Control::Divider => ControlId::Divider,
            Control::Toggle { id, .. }
            | Control::Picker { id, .. }
            | Control::Slider { id, .. }
            | Control::Button { id, .. } => *id,
        }
    }

    /// Text shown in the aligned label column, if the control has one
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Control::Title { .. } | Control::Divider => None,
            Control::Toggle { label, .. }
            | Control::Picker { label, .. }
            | Control::Slider { label, .. }
            | Control::Button { label, .. } => Some(label),
        }
    }
}

/// A user gesture on one of the panel's controls
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    Toggle(ControlId, bool),
    SelectLocale(usize),
    /// Raw slider position, snapped to the nearest category on write
    Slide(f64),
}

pub struct SettingsForm {
    params: SettingsParams,
    platform: Platform,
}

impl SettingsForm {
    pub fn new(params: SettingsParams, platform: Platform) -> Self {
        Self { params, platform }
    }

    pub fn params(&self) -> &SettingsParams {
        &self.params
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Screenshot button state; `capture_in_flight` keeps it off while a
    /// capture is running
    pub fn screenshot_enabled(&self, capture_in_flight: bool) -> bool {
        self.platform.screenshot_available() && !capture_in_flight
    }

    /// Current controls, top to bottom, read fresh from the bindings
    pub fn controls(&self, capture_in_flight: bool) -> Vec<Control> {
        let params = &self.params;
        let text_size = params.text_size.get();

        vec![
            Control::Title { text: TITLE },
            Control::Divider,
            Control::Toggle {
                id: ControlId::Theme,
                label: THEME_LABEL,
                on: params.dark_theme().get(),
            },
            self.locale_picker(),
            Control::Slider {
                id: ControlId::TextSize,
                label: TEXT_SIZE_LABEL,
                value: text_size.position(),
                min: TextSize::smallest().position(),
                max: TextSize::largest().position(),
                step: TextSize::STRIDE,
                value_text: text_size.display_name().to_string(),
            },
            Control::Toggle {
                id: ControlId::LayoutDirection,
                label: DIRECTION_LABEL,
                on: params.right_to_left().get(),
            },
            Control::Toggle {
                id: ControlId::Accessibility,
                label: ACCESSIBILITY_LABEL,
                on: params.accessibility_enabled.get(),
            },
            Control::Button {
                id: ControlId::Screenshot,
                label: SCREENSHOT_LABEL,
                enabled: self.screenshot_enabled(capture_in_flight),
            },
        ]
    }

    fn locale_picker(&self) -> Control {
        let params = &self.params;
        let mut options: Vec<String> = params
            .locales
            .iter()
            .map(|locale| locale.identifier().to_string())
            .collect();
        let selected = params.selected_locale_index();
        if selected.is_none() {
            options.push(params.locale.get().identifier().to_string());
        }
        Control::Picker {
            id: ControlId::Locale,
            label: LOCALE_LABEL,
            options,
            selected,
            enabled: params.locale_picker_enabled(),
        }
    }

    /// Write an interaction back through its binding.
    ///
    /// Returns `false` when the gesture does not map to a writable control
    /// (an unknown toggle, a disabled picker or an out-of-range index).
    pub fn apply(&self, interaction: Interaction) -> bool {
        let params = &self.params;
        match interaction {
            Interaction::Toggle(ControlId::Theme, on) => {
                log::debug!("theme toggle -> {}", if on { "dark" } else { "light" });
                params.dark_theme().set(on);
            }
            Interaction::Toggle(ControlId::LayoutDirection, on) => {
                log::debug!("layout direction toggle -> rtl={}", on);
                params.right_to_left().set(on);
            }
            Interaction::Toggle(ControlId::Accessibility, on) => {
                log::debug!("accessibility toggle -> {}", on);
                params.accessibility_enabled.set(on);
            }
            Interaction::Toggle(id, _) => {
                log::warn!("ignoring toggle on non-toggle control {:?}", id);
                return false;
            }
            Interaction::SelectLocale(index) => {
                if !params.locale_picker_enabled() {
                    return false;
                }
                let Some(locale) = params.locales.get(index) else {
                    if index == params.locales.len() && params.selected_locale_index().is_none() {
                        log::debug!("unlisted locale row picked, binding kept");
                        return false;
                    }
                    log::warn!("locale index {} out of range", index);
                    return false;
                };
                log::debug!("locale -> {}", locale);
                params.locale.set(locale.clone());
            }
            Interaction::Slide(position) => {
                let size = TextSize::from_position(position);
                log::debug!("text size -> {}", size);
                params.text_size_position().set(size.position());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locales(ids: &[&str]) -> Vec<Locale> {
        ids.iter().copied().map(Locale::from).collect()
    }

    fn form(ids: &[&str], platform: Platform) -> SettingsForm {
        SettingsForm::new(SettingsParams::standalone(locales(ids)), platform)
    }

    fn find(controls: &[Control], id: ControlId) -> Control {
        controls
            .iter()
            .find(|control| control.id() == id)
            .cloned()
            .unwrap_or_else(|| panic!("no control {:?}", id))
    }

    #[test]
    fn test_control_order() {
        let form = form(&["en", "ru"], Platform::Mobile);
        let ids: Vec<ControlId> = form.controls(false).iter().map(Control::id).collect();
        assert_eq!(
            ids,
            vec![
                ControlId::Title,
                ControlId::Divider,
                ControlId::Theme,
                ControlId::Locale,
                ControlId::TextSize,
                ControlId::LayoutDirection,
                ControlId::Accessibility,
                ControlId::Screenshot,
            ]
        );
        assert_eq!(form.controls(false)[0], Control::Title { text: "Preview Settings" });
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        let form = form(&["en"], Platform::Desktop);
        let scheme = form.params().color_scheme.clone();

        assert!(form.apply(Interaction::Toggle(ControlId::Theme, true)));
        assert_eq!(scheme.get(), ColorScheme::Dark);
        assert!(form.apply(Interaction::Toggle(ControlId::Theme, false)));
        assert_eq!(scheme.get(), ColorScheme::Light);
    }

    #[test]
    fn test_dark_scheme_renders_toggle_on() {
        let form = form(&["en"], Platform::Desktop);
        form.params().color_scheme.set(ColorScheme::Dark);

        let theme = find(&form.controls(false), ControlId::Theme);
        assert!(matches!(theme, Control::Toggle { on: true, .. }));

        form.apply(Interaction::Toggle(ControlId::Theme, false));
        assert_eq!(form.params().color_scheme.get(), ColorScheme::Light);
        let theme = find(&form.controls(false), ControlId::Theme);
        assert!(matches!(theme, Control::Toggle { on: false, .. }));
    }

    #[test]
    fn test_direction_and_accessibility_toggles() {
        let form = form(&["en"], Platform::Desktop);

        form.apply(Interaction::Toggle(ControlId::LayoutDirection, true));
        assert_eq!(form.params().layout_direction.get(), LayoutDirection::RightToLeft);
        form.apply(Interaction::Toggle(ControlId::LayoutDirection, false));
        assert_eq!(form.params().layout_direction.get(), LayoutDirection::LeftToRight);

        form.apply(Interaction::Toggle(ControlId::Accessibility, true));
        assert!(form.params().accessibility_enabled.get());
        form.apply(Interaction::Toggle(ControlId::Accessibility, false));
        assert!(!form.params().accessibility_enabled.get());
    }

    #[test]
    fn test_toggle_on_other_control_is_rejected() {
        let form = form(&["en"], Platform::Desktop);
        assert!(!form.apply(Interaction::Toggle(ControlId::Screenshot, true)));
    }

    #[test]
    fn test_locale_picker_disabled_below_two_entries() {
        for (ids, enabled) in [(&[][..], false), (&["en"][..], false), (&["en", "fr"][..], true)] {
            let form = form(ids, Platform::Desktop);
            let picker = find(&form.controls(false), ControlId::Locale);
            assert!(
                matches!(picker, Control::Picker { enabled: e, .. } if e == enabled),
                "{:?}",
                ids
            );
        }
    }

    #[test]
    fn test_select_locale_writes_and_shows_selection() {
        let form = form(&["en", "ru", "fr"], Platform::Desktop);

        assert!(form.apply(Interaction::SelectLocale(1)));
        assert_eq!(form.params().locale.get(), Locale::from("ru"));

        match find(&form.controls(false), ControlId::Locale) {
            Control::Picker { options, selected, .. } => {
                assert_eq!(options, vec!["en", "ru", "fr"]);
                assert_eq!(selected, Some(1));
            }
            other => panic!("unexpected control {:?}", other),
        }
    }

    #[test]
    fn test_select_locale_rejected_when_disabled_or_out_of_range() {
        let single = form(&["en"], Platform::Desktop);
        assert!(!single.apply(Interaction::SelectLocale(0)));

        let form = form(&["en", "ru"], Platform::Desktop);
        assert!(!form.apply(Interaction::SelectLocale(5)));
        assert_eq!(form.params().locale.get(), Locale::from("en"));
    }

    #[test]
    fn test_unlisted_locale_has_no_selection() {
        let form = form(&["en", "ru"], Platform::Desktop);
        form.params().locale.set(Locale::from("ja"));
        assert_eq!(form.params().selected_locale_index(), None);
    }

    #[test]
    fn test_unlisted_locale_shown_as_extra_row() {
        let form = form(&["en", "ru"], Platform::Desktop);
        form.params().locale.set(Locale::from("ja"));

        match find(&form.controls(false), ControlId::Locale) {
            Control::Picker { options, selected, .. } => {
                assert_eq!(options, vec!["en", "ru", "ja"]);
                assert_eq!(selected, None);
            }
            other => panic!("unexpected {:?}", other),
        }

        // Picking the extra row leaves the binding alone
        assert!(!form.apply(Interaction::SelectLocale(2)));
        assert_eq!(form.params().locale.get(), Locale::from("ja"));

        assert!(form.apply(Interaction::SelectLocale(1)));
        match find(&form.controls(false), ControlId::Locale) {
            Control::Picker { options, selected, .. } => {
                assert_eq!(options, vec!["en", "ru"]);
                assert_eq!(selected, Some(1));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rejected_write_renders_bound_value() {
        let mut params = SettingsParams::standalone(locales(&["en", "ru"]));
        params.color_scheme = Binding::constant(ColorScheme::Light);
        params.locale = Binding::constant(Locale::from("en"));
        let form = SettingsForm::new(params, Platform::Desktop);

        // The gesture is accepted but the owner keeps its value
        assert!(form.apply(Interaction::Toggle(ControlId::Theme, true)));
        assert!(form.apply(Interaction::SelectLocale(1)));

        let controls = form.controls(false);
        assert!(matches!(find(&controls, ControlId::Theme), Control::Toggle { on: false, .. }));
        assert!(matches!(
            find(&controls, ControlId::Locale),
            Control::Picker { selected: Some(0), .. }
        ));
    }

    #[test]
    fn test_slider_one_stride_up_from_medium() {
        let form = form(&["en"], Platform::Desktop);
        form.params().text_size.set(TextSize::Medium);

        let value = match find(&form.controls(false), ControlId::TextSize) {
            Control::Slider { value, step, value_text, .. } => {
                assert_eq!(value_text, "Medium");
                value + step
            }
            other => panic!("unexpected control {:?}", other),
        };

        form.apply(Interaction::Slide(value));
        assert_eq!(form.params().text_size.get(), TextSize::Large);
        match find(&form.controls(false), ControlId::TextSize) {
            Control::Slider { value_text, .. } => assert_eq!(value_text, "Large"),
            other => panic!("unexpected control {:?}", other),
        }
    }

    #[test]
    fn test_slider_snaps_and_clamps() {
        let form = form(&["en"], Platform::Desktop);

        form.apply(Interaction::Slide(6.6));
        assert_eq!(form.params().text_size.get(), TextSize::Accessibility1);
        form.apply(Interaction::Slide(-20.0));
        assert_eq!(form.params().text_size.get(), TextSize::ExtraSmall);
        form.apply(Interaction::Slide(500.0));
        assert_eq!(form.params().text_size.get(), TextSize::Accessibility5);
    }

    #[test]
    fn test_slider_range_covers_all_categories() {
        let form = form(&["en"], Platform::Desktop);
        match find(&form.controls(false), ControlId::TextSize) {
            Control::Slider { min, max, step, .. } => {
                assert_eq!(min, 0.0);
                assert_eq!(max, 11.0);
                assert_eq!(step, 1.0);
            }
            other => panic!("unexpected control {:?}", other),
        }
    }

    #[test]
    fn test_screenshot_button_gated_by_platform_and_capture() {
        let desktop = form(&["en"], Platform::Desktop);
        let mobile = form(&["en"], Platform::Mobile);

        let enabled = |form: &SettingsForm, in_flight| match find(&form.controls(in_flight), ControlId::Screenshot) {
            Control::Button { enabled, .. } => enabled,
            other => panic!("unexpected control {:?}", other),
        };

        assert!(!enabled(&desktop, false));
        assert!(enabled(&mobile, false));
        assert!(!enabled(&mobile, true));
    }

    #[test]
    fn test_external_changes_show_on_next_read() {
        let form = form(&["en", "fr"], Platform::Desktop);
        let before = form.controls(false);

        form.params().accessibility_enabled.set(true);
        form.params().locale.set(Locale::from("fr"));

        let after = form.controls(false);
        assert_ne!(before, after);
        assert!(matches!(find(&after, ControlId::Accessibility), Control::Toggle { on: true, .. }));
        assert!(matches!(
            find(&after, ControlId::Locale),
            Control::Picker { selected: Some(1), .. }
        ));
    }

    #[test]
    fn test_labels() {
        let form = form(&["en"], Platform::Desktop);
        let labels: Vec<&str> = form.controls(false).iter().filter_map(Control::label).collect();
        assert_eq!(
            labels,
            vec!["Dark theme", "Locale", "Text size", "Right-to-left", "Accessibility", "Take screenshot"]
        );
    }
}
