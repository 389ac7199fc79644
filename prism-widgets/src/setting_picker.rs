//! Setting Picker Widget
//!
//! A labelled dropdown for choosing one entry from a short list. While
//! disabled the dropdown is dimmed and ignores input entirely.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use prism_widgets::setting_picker::*;
//!
//!     locale_picker = <SettingPicker> {
//!         label = { text: "Locale" }
//!     }
//! }
//! ```
//!
//! ```rust,ignore
//! let picker = self.view.setting_picker(ids!(locale_picker));
//! picker.set_options(cx, vec!["en".into(), "fr".into()]);
//! if let Some(index) = picker.selected(&actions) {
//!     // write back
//! }
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::*;
    use crate::setting_toggle::SettingLabel;

    PickerDropDown = <DropDown> {
        width: 160, height: Fit
        draw_bg: {
            instance dark_mode: 0.0
            instance disabled: 0.0
            border_radius: 4.0
            border_size: 1.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                let bg = mix((WHITE), (SLATE_600), self.dark_mode);
                let border = mix((SLATE_300), (SLATE_500), self.dark_mode);
                sdf.fill(mix(bg, (GRAY_100), self.disabled * (1.0 - self.dark_mode)));
                sdf.stroke(border, self.border_size);
                return sdf.result;
            }
        }
        draw_text: {
            instance dark_mode: 0.0
            instance disabled: 0.0
            text_style: <FONT_REGULAR>{ font_size: 11.0 }
            fn get_color(self) -> vec4 {
                let color = mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                return mix(color, (SLATE_400), self.disabled);
            }
        }
        popup_menu: {
            draw_bg: {
                instance dark_mode: 0.0
                border_size: 1.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 4.0);
                    let bg = mix((WHITE), (SLATE_700), self.dark_mode);
                    let border = mix((SLATE_300), (SLATE_500), self.dark_mode);
                    sdf.fill(bg);
                    sdf.stroke(border, self.border_size);
                    return sdf.result;
                }
            }
            menu_item: {
                indent_width: 10.0
                padding: {left: 15, top: 8, bottom: 8, right: 15}
                draw_bg: {
                    instance dark_mode: 0.0
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        sdf.rect(0., 0., self.rect_size.x, self.rect_size.y);
                        let base = mix((WHITE), (SLATE_700), self.dark_mode);
                        let hover_color = mix((GRAY_100), (SLATE_600), self.dark_mode);
                        sdf.fill(mix(base, hover_color, self.hover));
                        return sdf.result;
                    }
                }
                draw_text: {
                    instance dark_mode: 0.0
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }
        }
    }

    pub SettingPicker = {{SettingPicker}} {
        width: Fit, height: Fit
        flow: Right
        align: {y: 0.5}
        spacing: 12
        padding: {top: 4, bottom: 4}

        label = <SettingLabel> { text: "" }
        picker = <PickerDropDown> {
            labels: ["en"]
            selected_item: 0
        }
    }
}

/// Actions emitted by SettingPicker
#[derive(Clone, Debug, DefaultNone)]
pub enum SettingPickerAction {
    None,
    /// User picked the entry at this index
    Selected(usize),
}

#[derive(Live, LiveHook, Widget)]
pub struct SettingPicker {
    #[deref]
    view: View,

    #[rust]
    disabled: bool,
}

impl Widget for SettingPicker {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        if self.disabled {
            return;
        }

        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if let Some(index) = self.view.drop_down(ids!(picker)).changed(&actions) {
            cx.widget_action(
                self.widget_uid(),
                &scope.path,
                SettingPickerAction::Selected(index),
            );
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl SettingPicker {
    pub fn set_label(&mut self, cx: &mut Cx, text: &str) {
        self.view.label(ids!(label)).set_text(cx, text);
    }

    pub fn set_options(&mut self, cx: &mut Cx, options: Vec<String>) {
        self.view.drop_down(ids!(picker)).set_labels(cx, options);
        self.view.redraw(cx);
    }

    /// Select an entry without emitting an action
    pub fn set_selected(&mut self, cx: &mut Cx, index: usize) {
        self.view.drop_down(ids!(picker)).set_selected_item(cx, index);
    }

    pub fn selected_index(&self) -> usize {
        self.view.drop_down(ids!(picker)).selected_item()
    }

    pub fn set_disabled(&mut self, cx: &mut Cx, disabled: bool) {
        self.disabled = disabled;
        let value = if disabled { 1.0 } else { 0.0 };
        self.view.drop_down(ids!(picker)).apply_over(cx, live!{
            draw_bg: { disabled: (value) }
            draw_text: { disabled: (value) }
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
        self.view.drop_down(ids!(picker)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
            draw_text: { dark_mode: (dark_mode) }
            popup_menu: {
                draw_bg: { dark_mode: (dark_mode) }
                menu_item: {
                    draw_bg: { dark_mode: (dark_mode) }
                    draw_text: { dark_mode: (dark_mode) }
                }
            }
        });
        self.view.redraw(cx);
    }
}

impl SettingPickerRef {
    pub fn set_label(&self, cx: &mut Cx, text: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_label(cx, text);
        }
    }

    pub fn set_options(&self, cx: &mut Cx, options: Vec<String>) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_options(cx, options);
        }
    }

    pub fn set_selected(&self, cx: &mut Cx, index: usize) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_selected(cx, index);
        }
    }

    pub fn selected_index(&self) -> usize {
        self.borrow().map(|inner| inner.selected_index()).unwrap_or(0)
    }

    pub fn is_disabled(&self) -> bool {
        self.borrow().map(|inner| inner.disabled).unwrap_or(true)
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

    /// Check if the user picked an entry, returning its index
    pub fn selected(&self, actions: &Actions) -> Option<usize> {
        if let SettingPickerAction::Selected(index) = actions.find_widget_action(self.widget_uid()).cast() {
            Some(index)
        } else {
            None
        }
    }
}
