//! Prism Studio Shell - preview host for the settings panel

pub mod preferences;
pub mod widgets;

use parking_lot::Mutex;
use prism_settings::{project, Binding, ColorScheme, LayoutDirection, Locale, SettingsParams, TextSize};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Environment the preview canvas is rendered under
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewEnvironment {
    pub color_scheme: ColorScheme,
    pub locale: Locale,
    pub text_size: TextSize,
    pub layout_direction: LayoutDirection,
    pub accessibility_enabled: bool,
}

pub type SharedEnvironment = Arc<Mutex<PreviewEnvironment>>;

pub fn create_shared_environment(env: PreviewEnvironment) -> SharedEnvironment {
    Arc::new(Mutex::new(env))
}

/// Settings panel params whose bindings read and write `env`
pub fn settings_params(env: &SharedEnvironment, locales: Vec<Locale>) -> SettingsParams {
    SettingsParams {
        locales,
        locale: project(env, |e| e.locale.clone(), |e, v| e.locale = v),
        color_scheme: project(env, |e| e.color_scheme, |e, v| e.color_scheme = v),
        text_size: project(env, |e| e.text_size, |e, v| e.text_size = v),
        layout_direction: project(env, |e| e.layout_direction, |e, v| e.layout_direction = v),
        accessibility_enabled: project(
            env,
            |e| e.accessibility_enabled,
            |e, v| e.accessibility_enabled = v,
        ),
    }
}

/// Shared "panel hidden" flag and a binding onto it
pub fn panel_visibility() -> (Arc<Mutex<bool>>, Binding<bool>) {
    let hidden = Arc::new(Mutex::new(false));
    let binding = Binding::from_shared(Arc::clone(&hidden));
    (hidden, binding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_settings::{ControlId, Interaction, Platform, SettingsForm};

    #[test]
    fn test_default_environment() {
        let env = PreviewEnvironment::default();
        assert_eq!(env.color_scheme, ColorScheme::Light);
        assert_eq!(env.locale, Locale::from("en"));
        assert_eq!(env.text_size, TextSize::Large);
        assert_eq!(env.layout_direction, LayoutDirection::LeftToRight);
        assert!(!env.accessibility_enabled);
    }

    #[test]
    fn test_panel_writes_reach_shared_environment() {
        let env = create_shared_environment(PreviewEnvironment::default());
        let locales = vec![Locale::from("en"), Locale::from("ru"), Locale::from("fr")];
        let form = SettingsForm::new(settings_params(&env, locales), Platform::Desktop);

        form.apply(Interaction::Toggle(ControlId::Theme, true));
        form.apply(Interaction::SelectLocale(1));
        form.apply(Interaction::Slide(TextSize::Medium.position()));
        form.apply(Interaction::Toggle(ControlId::LayoutDirection, true));
        form.apply(Interaction::Toggle(ControlId::Accessibility, true));

        let env = env.lock();
        assert_eq!(env.color_scheme, ColorScheme::Dark);
        assert_eq!(env.locale, Locale::from("ru"));
        assert_eq!(env.text_size, TextSize::Medium);
        assert_eq!(env.layout_direction, LayoutDirection::RightToLeft);
        assert!(env.accessibility_enabled);
    }

    #[test]
    fn test_owner_changes_are_visible_to_panel() {
        let env = create_shared_environment(PreviewEnvironment::default());
        let params = settings_params(&env, vec![Locale::from("en")]);

        env.lock().text_size = TextSize::ExtraSmall;
        assert_eq!(params.text_size.get(), TextSize::ExtraSmall);
    }

    #[test]
    fn test_panel_visibility_flag() {
        let (hidden, binding) = panel_visibility();
        binding.set(true);
        assert!(*hidden.lock());
    }
}
