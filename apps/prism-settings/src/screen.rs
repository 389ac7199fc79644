//! Settings Panel - preview environment controls
//!
//! Renders the controls produced by [`SettingsForm`] and forwards user
//! gestures back to it. The panel holds no environment state of its own:
//! every draw re-reads the bindings, so changes made by the owner show up
//! on the next frame.

use makepad_widgets::*;
use parking_lot::Mutex;
use prism_widgets::{
    SettingPickerWidgetExt, SettingToggleRef, SettingToggleWidgetExt, StateChangeListener,
    StepSliderWidgetExt,
};
use std::sync::Arc;

use crate::capture::{CaptureSequence, HapticFeedback, ScreenshotService};
use crate::data::{Binding, Locale};
use crate::form::{Control, ControlId, Interaction, SettingsForm, SettingsParams};
use crate::layout::WidthAligner;
use crate::platform::Platform;
use crate::services::CaptureServices;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use prism_widgets::theme::*;
    use prism_widgets::setting_toggle::*;
    use prism_widgets::setting_picker::*;
    use prism_widgets::step_slider::*;

    PanelDivider = <View> {
        width: Fill, height: 1
        margin: {top: 4, bottom: 8}
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((BORDER), (BORDER_DARK), self.dark_mode);
            }
        }
    }

    ScreenshotButton = <Button> {
        width: Fill, height: 36
        margin: {top: 8}
        padding: {left: 16, right: 16, top: 8, bottom: 8}

        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            instance disabled: 0.0
            instance dark_mode: 0.0
            instance radius: 6.0

            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let active = mix(
                    mix((ACCENT_BLUE), (BLUE_600), self.hover),
                    (BLUE_700),
                    self.pressed
                );
                let inactive = mix((SLATE_200), (SLATE_700), self.dark_mode);
                sdf.box(1.0, 1.0, self.rect_size.x - 2.0, self.rect_size.y - 2.0, self.radius);
                sdf.fill(mix(active, inactive, self.disabled));
                return sdf.result;
            }
        }

        draw_text: {
            instance disabled: 0.0
            text_style: <FONT_SEMIBOLD>{ font_size: 11.0 }
            fn get_color(self) -> vec4 {
                return mix((WHITE), (SLATE_400), self.disabled);
            }
        }

        text: ""
    }

    pub SettingsPanel = {{SettingsPanel}} {
        width: 380, height: Fit
        flow: Down
        spacing: 4
        padding: {left: 20, right: 20, top: 16, bottom: 20}
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 8.0);
                sdf.fill(mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode));
                sdf.stroke(mix((BORDER), (BORDER_DARK), self.dark_mode), 1.0);
                return sdf.result;
            }
        }

        title = <Label> {
            text: ""
            draw_text: {
                instance dark_mode: 0.0
                text_style: <FONT_BOLD>{ font_size: 13.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                }
            }
        }

        divider = <PanelDivider> {}

        theme_toggle = <SettingToggle> {}
        locale_picker = <SettingPicker> {}
        text_size_slider = <StepSlider> {
            min: 0.0, max: 11.0, step: 1.0
        }
        direction_toggle = <SettingToggle> {}
        accessibility_toggle = <SettingToggle> {}

        screenshot_button = <ScreenshotButton> {}
    }
}

/// Actions emitted by SettingsPanel
#[derive(Clone, Debug, DefaultNone)]
pub enum SettingsPanelAction {
    None,
    /// A bound value was written by the user
    EnvironmentChanged,
    /// Panel hidden, capture scheduled
    CaptureStarted,
    /// Capture ran and the panel is visible again; carries the outcome
    CaptureFinished(bool),
}

#[derive(Live, LiveHook, Widget)]
pub struct SettingsPanel {
    #[deref]
    view: View,

    #[rust]
    form: Option<SettingsForm>,

    /// Set while the panel should be off screen for a capture
    #[rust]
    hidden: Option<Binding<bool>>,

    #[rust]
    capture: CaptureSequence,

    #[rust]
    capture_timer: Timer,

    #[rust]
    services: CaptureServices,

    #[rust]
    aligner: WidthAligner,

    /// Label width last pushed to the controls
    #[rust]
    applied_width: Option<f64>,

    /// Controls as of the last draw, to skip re-applying unchanged state
    #[rust]
    rendered: Vec<Control>,
}

impl Widget for SettingsPanel {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        if self.capture_timer.is_event(event).is_some() {
            self.finish_capture(cx, scope);
        }

        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));
        if actions.is_empty() {
            return;
        }

        let mut interactions = Vec::new();
        for (id, toggle) in self.toggles() {
            if let Some(on) = toggle.toggled(&actions) {
                interactions.push(Interaction::Toggle(id, on));
            }
        }
        if let Some(index) = self.view.setting_picker(ids!(locale_picker)).selected(&actions) {
            interactions.push(Interaction::SelectLocale(index));
        }
        if let Some(value) = self.view.step_slider(ids!(text_size_slider)).changed(&actions) {
            interactions.push(Interaction::Slide(value));
        }

        if !interactions.is_empty() {
            let form = self.form();
            let changed = interactions
                .into_iter()
                .fold(false, |changed, interaction| form.apply(interaction) || changed);
            if changed {
                cx.widget_action(
                    self.widget_uid(),
                    &scope.path,
                    SettingsPanelAction::EnvironmentChanged,
                );
            }
            // Widgets already show the gesture; re-read the bindings on the next draw
            self.rendered.clear();
            self.view.redraw(cx);
        }

        if self.view.button(ids!(screenshot_button)).clicked(&actions) {
            self.start_capture(cx, scope);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.sync_controls(cx);
        let step = self.view.draw_walk(cx, scope, walk);
        self.align_labels(cx);
        step
    }
}

impl SettingsPanel {
    /// The configured form, or a self-contained one until the owner calls
    /// [`SettingsPanelRef::configure`]
    fn form(&mut self) -> &SettingsForm {
        self.form.get_or_insert_with(|| {
            SettingsForm::new(
                SettingsParams::standalone(vec![Locale::default()]),
                Platform::current(),
            )
        })
    }

    fn hidden(&mut self) -> Binding<bool> {
        self.hidden
            .get_or_insert_with(|| Binding::from_shared(Arc::new(Mutex::new(false))))
            .clone()
    }

    fn toggles(&self) -> [(ControlId, SettingToggleRef); 3] {
        [
            (ControlId::Theme, self.view.setting_toggle(ids!(theme_toggle))),
            (ControlId::LayoutDirection, self.view.setting_toggle(ids!(direction_toggle))),
            (ControlId::Accessibility, self.view.setting_toggle(ids!(accessibility_toggle))),
        ]
    }

    fn toggle(&self, id: ControlId) -> Option<SettingToggleRef> {
        self.toggles()
            .into_iter()
            .find_map(|(toggle_id, toggle)| (toggle_id == id).then_some(toggle))
    }

    /// Push binding values into the widgets if anything moved since the
    /// last draw
    fn sync_controls(&mut self, cx: &mut Cx) {
        let in_flight = self.capture.is_in_flight();
        let controls = self.form().controls(in_flight);
        if controls == self.rendered {
            return;
        }
        for control in &controls {
            self.apply_control(cx, control);
        }
        self.rendered = controls;
    }

    fn apply_control(&mut self, cx: &mut Cx, control: &Control) {
        match control {
            Control::Title { text } => {
                self.view.label(ids!(title)).set_text(cx, text);
            }
            Control::Divider => {}
            Control::Toggle { id, label, on } => {
                if let Some(toggle) = self.toggle(*id) {
                    toggle.set_label(cx, label);
                    toggle.set_on(cx, *on);
                }
            }
            Control::Picker {
                label,
                options,
                selected,
                enabled,
                ..
            } => {
                let picker = self.view.setting_picker(ids!(locale_picker));
                picker.set_label(cx, label);
                picker.set_options(cx, options.clone());
                let row = selected.unwrap_or(options.len().saturating_sub(1));
                picker.set_selected(cx, row);
                picker.set_disabled(cx, !enabled);
            }
            Control::Slider {
                label,
                value,
                min,
                max,
                step,
                value_text,
                ..
            } => {
                let slider = self.view.step_slider(ids!(text_size_slider));
                slider.set_label(cx, label);
                slider.set_range(cx, *min, *max, *step);
                slider.set_value(cx, *value);
                slider.set_value_text(cx, value_text);
            }
            Control::Button { label, enabled, .. } => {
                let button = self.view.button(ids!(screenshot_button));
                button.set_text(cx, label);
                let disabled = if *enabled { 0.0 } else { 1.0 };
                button.apply_over(cx, live!{
                    draw_bg: { disabled: (disabled) }
                    draw_text: { disabled: (disabled) }
                });
            }
        }
    }

    /// Second layout pass: measure label columns and pin them all to the
    /// widest one
    fn align_labels(&mut self, cx: &mut Cx) {
        let mut widths: Vec<f64> = self
            .toggles()
            .iter()
            .map(|(_, toggle)| toggle.label_width(cx))
            .collect();
        widths.push(self.view.setting_picker(ids!(locale_picker)).label_width(cx));
        widths.push(self.view.step_slider(ids!(text_size_slider)).label_width(cx));

        self.aligner.report_all(widths);
        let width = self.aligner.width();
        if self.applied_width == Some(width) {
            return;
        }

        log::debug!("aligning settings labels to {:.1}px", width);
        for (_, toggle) in self.toggles() {
            toggle.set_label_width(cx, width);
        }
        self.view.setting_picker(ids!(locale_picker)).set_label_width(cx, width);
        self.view.step_slider(ids!(text_size_slider)).set_label_width(cx, width);
        self.applied_width = Some(width);
        self.view.redraw(cx);
    }

    fn start_capture(&mut self, cx: &mut Cx, scope: &mut Scope) {
        let in_flight = self.capture.is_in_flight();
        if !self.form().screenshot_enabled(in_flight) {
            log::debug!("screenshot button is disabled, ignoring press");
            return;
        }

        let hidden = self.hidden();
        match self.capture.begin(&hidden) {
            Ok(delay) => {
                self.capture_timer = cx.start_timeout(delay.as_secs_f64());
                cx.widget_action(
                    self.widget_uid(),
                    &scope.path,
                    SettingsPanelAction::CaptureStarted,
                );
                self.view.redraw(cx);
            }
            Err(e) => log::debug!("screenshot not started: {}", e),
        }
    }

    fn finish_capture(&mut self, cx: &mut Cx, scope: &mut Scope) {
        let hidden = self.hidden();
        let outcome = self.capture.complete(
            &hidden,
            self.services.screenshot.as_ref(),
            self.services.haptics.as_ref(),
        );
        if let Some(succeeded) = outcome {
            cx.widget_action(
                self.widget_uid(),
                &scope.path,
                SettingsPanelAction::CaptureFinished(succeeded),
            );
            self.view.redraw(cx);
        }
    }

    fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.view.apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.label(ids!(title)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.view(ids!(divider)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        for (_, toggle) in self.toggles() {
            toggle.apply_dark_mode(cx, dark_mode);
        }
        self.view.setting_picker(ids!(locale_picker)).apply_dark_mode(cx, dark_mode);
        self.view.step_slider(ids!(text_size_slider)).apply_dark_mode(cx, dark_mode);
        self.view.button(ids!(screenshot_button)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.redraw(cx);
    }
}

impl SettingsPanelRef {
    /// Bind the panel to its owner's values.
    ///
    /// `hidden` is set while a screenshot is being taken; the owner is
    /// expected to take the panel off screen while it is `true`.
    pub fn configure(
        &self,
        cx: &mut Cx,
        params: SettingsParams,
        hidden: Binding<bool>,
        platform: Platform,
    ) {
        if let Some(mut inner) = self.borrow_mut() {
            log::info!(
                "settings panel bound ({} locales, platform {})",
                params.locales.len(),
                platform
            );
            inner.form = Some(SettingsForm::new(params, platform));
            inner.hidden = Some(hidden);
            inner.rendered.clear();
            inner.view.redraw(cx);
        }
    }

    /// Replace the screenshot and haptic collaborators
    pub fn set_capture_services(
        &self,
        screenshot: impl ScreenshotService + 'static,
        haptics: impl HapticFeedback + 'static,
    ) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.services = CaptureServices::new(screenshot, haptics);
        }
    }

    /// Re-read the bindings on the next frame
    pub fn refresh(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.view.redraw(cx);
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.borrow()
            .map(|inner| inner.capture.is_in_flight())
            .unwrap_or(false)
    }

    /// Label column width currently applied to the controls
    pub fn control_width(&self) -> f64 {
        self.borrow()
            .map(|inner| inner.aligner.width())
            .unwrap_or(crate::layout::MIN_CONTROL_WIDTH)
    }

    pub fn environment_changed(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            SettingsPanelAction::EnvironmentChanged
        )
    }

    pub fn capture_started(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            SettingsPanelAction::CaptureStarted
        )
    }

    /// Outcome of a capture that finished in this batch of actions
    pub fn capture_finished(&self, actions: &Actions) -> Option<bool> {
        if let SettingsPanelAction::CaptureFinished(succeeded) =
            actions.find_widget_action(self.widget_uid()).cast()
        {
            Some(succeeded)
        } else {
            None
        }
    }
}

impl StateChangeListener for SettingsPanelRef {
    fn on_dark_mode_change(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}
