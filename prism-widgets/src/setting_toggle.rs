//! Setting Toggle Widget
//!
//! A labelled on/off switch for settings forms. The label sits in a column
//! whose width can be fixed from outside so that several toggles (and other
//! controls) line up.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use prism_widgets::setting_toggle::*;
//!
//!     theme_toggle = <SettingToggle> {
//!         label = { text: "Dark theme" }
//!     }
//! }
//! ```
//!
//! ## Handling Changes
//!
//! ```rust,ignore
//! let toggle = self.view.setting_toggle(ids!(theme_toggle));
//! if let Some(on) = toggle.toggled(&actions) {
//!     // write `on` back to the owner
//! }
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::*;

    pub SettingLabel = <Label> {
        width: Fit
        draw_text: {
            instance dark_mode: 0.0
            text_style: <FONT_REGULAR>{ font_size: 11.0 }
            fn get_color(self) -> vec4 {
                return mix((GRAY_700), (TEXT_PRIMARY_DARK), self.dark_mode);
            }
        }
    }

    // Rounded track with a sliding knob
    SwitchTrack = <View> {
        width: 36, height: 20
        cursor: Hand
        show_bg: true
        draw_bg: {
            instance on: 0.0
            instance dark_mode: 0.0
            instance disabled: 0.0

            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let r = self.rect_size.y * 0.5;
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, r);
                let off = mix((SLATE_300), (SLATE_600), self.dark_mode);
                let track = mix(off, (ACCENT_BLUE), self.on);
                sdf.fill(mix(track, (GRAY_300), self.disabled * 0.6));
                let knob_x = mix(r, self.rect_size.x - r, self.on);
                sdf.circle(knob_x, r, r - 2.0);
                sdf.fill((WHITE));
                return sdf.result;
            }
        }
    }

    pub SettingToggle = {{SettingToggle}} {
        width: Fit, height: Fit
        flow: Right
        align: {y: 0.5}
        spacing: 12
        padding: {top: 4, bottom: 4}

        label = <SettingLabel> { text: "" }
        switch = <SwitchTrack> {}
    }
}

/// Actions emitted by SettingToggle
#[derive(Clone, Debug, DefaultNone)]
pub enum SettingToggleAction {
    None,
    /// Switch flipped by the user, carries the new state
    Toggled(bool),
}

#[derive(Live, LiveHook, Widget)]
pub struct SettingToggle {
    #[deref]
    view: View,

    #[rust]
    on: bool,

    #[rust]
    disabled: bool,
}

impl Widget for SettingToggle {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        if self.disabled {
            return;
        }

        let switch = self.view.view(ids!(switch));
        match event.hits(cx, switch.area()) {
            Hit::FingerUp(_) => {
                let on = !self.on;
                self.set_on(cx, on);
                cx.widget_action(
                    self.widget_uid(),
                    &scope.path,
                    SettingToggleAction::Toggled(on),
                );
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl SettingToggle {
    pub fn set_label(&mut self, cx: &mut Cx, text: &str) {
        self.view.label(ids!(label)).set_text(cx, text);
    }

    /// Set the switch state without emitting an action
    pub fn set_on(&mut self, cx: &mut Cx, on: bool) {
        if self.on == on {
            return;
        }
        self.on = on;
        self.view.view(ids!(switch)).apply_over(cx, live!{
            draw_bg: { on: (if on { 1.0 } else { 0.0 }) }
        });
        self.view.redraw(cx);
    }

    pub fn set_disabled(&mut self, cx: &mut Cx, disabled: bool) {
        self.disabled = disabled;
        self.view.view(ids!(switch)).apply_over(cx, live!{
            draw_bg: { disabled: (if disabled { 1.0 } else { 0.0 }) }
        });
        self.view.redraw(cx);
    }

    /// Width the label currently occupies (after the last draw)
    pub fn label_width(&self, cx: &Cx) -> f64 {
        self.view.label(ids!(label)).area().rect(cx).size.x
    }

    /// Pin the label column to a fixed width
    pub fn set_label_width(&mut self, cx: &mut Cx, width: f64) {
        self.view.label(ids!(label)).apply_over(cx, live!{ width: (width) });
        self.view.redraw(cx);
    }

    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.view.label(ids!(label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.view(ids!(switch)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.redraw(cx);
    }
}

impl SettingToggleRef {
    pub fn set_label(&self, cx: &mut Cx, text: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_label(cx, text);
        }
    }

    pub fn set_on(&self, cx: &mut Cx, on: bool) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_on(cx, on);
        }
    }

    pub fn is_on(&self) -> bool {
        self.borrow().map(|inner| inner.on).unwrap_or(false)
    }

    pub fn set_disabled(&self, cx: &mut Cx, disabled: bool) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_disabled(cx, disabled);
        }
    }

    pub fn label_width(&self, cx: &Cx) -> f64 {
        self.borrow().map(|inner| inner.label_width(cx)).unwrap_or(0.0)
    }

    pub fn set_label_width(&self, cx: &mut Cx, width: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_label_width(cx, width);
        }
    }

    pub fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }

    /// Check if the switch was flipped, returning the new state
    pub fn toggled(&self, actions: &Actions) -> Option<bool> {
        if let SettingToggleAction::Toggled(on) = actions.find_widget_action(self.widget_uid()).cast() {
            Some(on)
        } else {
            None
        }
    }
}
