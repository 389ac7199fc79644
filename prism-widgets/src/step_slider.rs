//! Step Slider Widget
//!
//! A labelled horizontal slider that only lands on discrete steps between
//! `min` and `max`. Tapping the track jumps to the nearest step, dragging
//! follows the finger. The current value's caption is set by the owner
//! (e.g. a category name) and shown to the right of the track.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use prism_widgets::step_slider::*;
//!
//!     text_size_slider = <StepSlider> {
//!         min: 0.0, max: 11.0, step: 1.0
//!         label = { text: "Text size" }
//!     }
//! }
//! ```
//!
//! ## Handling Changes
//!
//! ```rust,ignore
//! let slider = self.view.step_slider(ids!(text_size_slider));
//! if let Some(value) = slider.changed(&actions) {
//!     slider.set_value_text(cx, &format!("{value}"));
//! }
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::theme::*;
    use crate::setting_toggle::SettingLabel;

    SliderTrack = <View> {
        width: 160, height: 20
        cursor: Hand
        show_bg: true
        draw_bg: {
            instance fraction: 0.0
            instance dark_mode: 0.0

            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let cy = self.rect_size.y * 0.5;
                let r = cy - 2.0;
                let left = r;
                let right = self.rect_size.x - r;
                let x = mix(left, right, self.fraction);

                // Rail
                sdf.box(left, cy - 2.0, right - left, 4.0, 2.0);
                sdf.fill(mix((SLATE_300), (SLATE_600), self.dark_mode));

                // Filled part
                sdf.box(left, cy - 2.0, max(x - left, 0.5), 4.0, 2.0);
                sdf.fill((ACCENT_BLUE));

                // Thumb
                sdf.circle(x, cy, r);
                sdf.fill((WHITE));
                sdf.stroke(mix((SLATE_300), (SLATE_500), self.dark_mode), 1.0);
                return sdf.result;
            }
        }
    }

    pub StepSlider = {{StepSlider}} {
        width: Fit, height: Fit
        flow: Right
        align: {y: 0.5}
        spacing: 12
        padding: {top: 4, bottom: 4}

        label = <SettingLabel> { text: "" }
        track = <SliderTrack> {}
        value_label = <Label> {
            width: Fit
            text: ""
            draw_text: {
                instance dark_mode: 0.0
                text_style: <FONT_REGULAR>{ font_size: 10.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                }
            }
        }
    }
}

/// Snap a raw value to the nearest step inside `[min, max]`.
///
/// A non-positive `step` disables snapping (the value is only clamped).
pub fn snap_to_step(raw: f64, min: f64, max: f64, step: f64) -> f64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let clamped = raw.clamp(lo, hi);
    if step <= 0.0 {
        return clamped;
    }
    let snapped = lo + ((clamped - lo) / step).round() * step;
    snapped.min(hi)
}

/// Position of `value` along the track, 0.0 at `min` and 1.0 at `max`
pub fn value_fraction(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        return 0.0;
    }
    ((value - min) / span).clamp(0.0, 1.0)
}

/// Actions emitted by StepSlider
#[derive(Clone, Debug, DefaultNone)]
pub enum StepSliderAction {
    None,
    /// Value moved to a new step
    Changed(f64),
}

#[derive(Live, LiveHook, Widget)]
pub struct StepSlider {
    #[deref]
    view: View,

    #[live(0.0)]
    min: f64,

    #[live(1.0)]
    max: f64,

    #[live(1.0)]
    step: f64,

    #[rust]
    value: f64,

    #[rust]
    dragging: bool,
}

impl Widget for StepSlider {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        let track = self.view.view(ids!(track));
        let abs_x = match event.hits(cx, track.area()) {
            Hit::FingerDown(fd) => {
                self.dragging = true;
                Some(fd.abs.x)
            }
            Hit::FingerMove(fm) if self.dragging => Some(fm.abs.x),
            Hit::FingerUp(_) => {
                self.dragging = false;
                None
            }
            _ => None,
        };

        if let Some(abs_x) = abs_x {
            let rect = track.area().rect(cx);
            if rect.size.x <= 0.0 {
                return;
            }
            let fraction = ((abs_x - rect.pos.x) / rect.size.x).clamp(0.0, 1.0);
            let raw = self.min + fraction * (self.max - self.min);
            let value = snap_to_step(raw, self.min, self.max, self.step);
            if (value - self.value).abs() > f64::EPSILON {
                self.set_value(cx, value);
                cx.widget_action(
                    self.widget_uid(),
                    &scope.path,
                    StepSliderAction::Changed(value),
                );
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl StepSlider {
    pub fn set_label(&mut self, cx: &mut Cx, text: &str) {
        self.view.label(ids!(label)).set_text(cx, text);
    }

    /// Change the range and step, re-snapping the current value
    pub fn set_range(&mut self, cx: &mut Cx, min: f64, max: f64, step: f64) {
        self.min = min;
        self.max = max;
        self.step = step;
        let value = self.value;
        self.set_value(cx, value);
    }

    /// Move the thumb without emitting an action
    pub fn set_value(&mut self, cx: &mut Cx, value: f64) {
        self.value = snap_to_step(value, self.min, self.max, self.step);
        let fraction = value_fraction(self.value, self.min, self.max);
        self.view.view(ids!(track)).apply_over(cx, live!{
            draw_bg: { fraction: (fraction) }
        });
        self.view.redraw(cx);
    }

    pub fn set_value_text(&mut self, cx: &mut Cx, text: &str) {
        self.view.label(ids!(value_label)).set_text(cx, text);
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
        self.view.label(ids!(value_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.view(ids!(track)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.redraw(cx);
    }
}

impl StepSliderRef {
    pub fn set_label(&self, cx: &mut Cx, text: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_label(cx, text);
        }
    }

    pub fn set_range(&self, cx: &mut Cx, min: f64, max: f64, step: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_range(cx, min, max, step);
        }
    }

    pub fn set_value(&self, cx: &mut Cx, value: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_value(cx, value);
        }
    }

    pub fn value(&self) -> f64 {
        self.borrow().map(|inner| inner.value).unwrap_or(0.0)
    }

    pub fn set_value_text(&self, cx: &mut Cx, text: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_value_text(cx, text);
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

    /// Check if the user moved the slider to a new step
    pub fn changed(&self, actions: &Actions) -> Option<f64> {
        if let StepSliderAction::Changed(value) = actions.find_widget_action(self.widget_uid()).cast() {
            Some(value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_nearest_step() {
        assert_eq!(snap_to_step(2.4, 0.0, 11.0, 1.0), 2.0);
        assert_eq!(snap_to_step(2.6, 0.0, 11.0, 1.0), 3.0);
        assert_eq!(snap_to_step(0.49, 0.0, 11.0, 1.0), 0.0);
    }

    #[test]
    fn test_snap_clamps_to_range() {
        assert_eq!(snap_to_step(-3.0, 0.0, 11.0, 1.0), 0.0);
        assert_eq!(snap_to_step(42.0, 0.0, 11.0, 1.0), 11.0);
    }

    #[test]
    fn test_snap_never_overshoots_max() {
        // 10.0 is not on the 4.0 grid; rounding 2.5 steps up would give 12.0
        assert_eq!(snap_to_step(10.0, 0.0, 10.0, 4.0), 10.0);
    }

    #[test]
    fn test_snap_without_step_only_clamps() {
        assert_eq!(snap_to_step(0.37, 0.0, 1.0, 0.0), 0.37);
        assert_eq!(snap_to_step(1.5, 0.0, 1.0, -1.0), 1.0);
    }

    #[test]
    fn test_value_fraction() {
        assert_eq!(value_fraction(0.0, 0.0, 10.0), 0.0);
        assert_eq!(value_fraction(5.0, 0.0, 10.0), 0.5);
        assert_eq!(value_fraction(10.0, 0.0, 10.0), 1.0);
        assert_eq!(value_fraction(20.0, 0.0, 10.0), 1.0);
        // Degenerate range
        assert_eq!(value_fraction(3.0, 3.0, 3.0), 0.0);
    }
}
