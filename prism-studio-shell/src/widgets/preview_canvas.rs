//! PreviewCanvas Widget - sample content rendered under the preview environment
//!
//! Shows a greeting in the selected locale, sized by the text size category,
//! aligned by layout direction and outlined in a high-contrast color when
//! the accessibility flag is on.

use makepad_widgets::*;
use prism_settings::{LayoutDirection, Locale};
use prism_ui::Themeable;

use crate::PreviewEnvironment;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use prism_widgets::theme::*;

    pub PreviewCanvas = {{PreviewCanvas}} {
        width: Fill, height: Fill
        flow: Down
        spacing: 12
        padding: 32
        align: {x: 0.0, y: 0.5}
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            instance outline: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(2., 2., self.rect_size.x - 4.0, self.rect_size.y - 4.0, 8.0);
                sdf.fill(mix((WHITE), (SLATE_800), self.dark_mode));
                let high_contrast = mix(vec4(0.0, 0.0, 0.0, 1.0), (AMBER_500), self.dark_mode);
                let border = mix(mix((BORDER), (BORDER_DARK), self.dark_mode), high_contrast, self.outline);
                sdf.stroke(border, 1.0 + 2.0 * self.outline);
                return sdf.result;
            }
        }

        greeting = <Label> {
            text: ""
            draw_text: {
                instance dark_mode: 0.0
                text_style: <FONT_BOLD>{ font_size: 17.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }

        caption = <Label> {
            text: ""
            draw_text: {
                instance dark_mode: 0.0
                text_style: <FONT_REGULAR>{ font_size: 11.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                }
            }
        }
    }
}

/// Sample greeting for a locale, or the identifier if there is none
pub fn greeting_for(locale: &Locale) -> String {
    let greeting = match locale.language() {
        "en" => "Hello, world!",
        "ru" => "Привет, мир!",
        "fr" => "Bonjour le monde !",
        "de" => "Hallo Welt!",
        "ar" => "مرحبا بالعالم!",
        "ja" => "こんにちは世界！",
        _ => return locale.identifier().to_string(),
    };
    greeting.to_string()
}

/// Horizontal alignment of the canvas content (0.0 = leading left)
pub fn horizontal_align(direction: LayoutDirection) -> f64 {
    if direction.is_right_to_left() {
        1.0
    } else {
        0.0
    }
}

/// One-line summary shown under the greeting
pub fn caption(env: &PreviewEnvironment) -> String {
    let mut parts = vec![
        env.locale.identifier().to_string(),
        env.text_size.display_name().to_string(),
        if env.layout_direction.is_right_to_left() { "RTL" } else { "LTR" }.to_string(),
    ];
    if env.accessibility_enabled {
        parts.push("accessibility on".to_string());
    }
    parts.join(" · ")
}

#[derive(Live, LiveHook, Widget)]
pub struct PreviewCanvas {
    #[deref]
    view: View,

    #[rust]
    environment: Option<PreviewEnvironment>,
}

impl Widget for PreviewCanvas {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl PreviewCanvas {
    fn set_environment(&mut self, cx: &mut Cx, env: &PreviewEnvironment) {
        if self.environment.as_ref() == Some(env) {
            return;
        }

        let points = env.text_size.body_points();
        let align_x = horizontal_align(env.layout_direction);
        let outline = if env.accessibility_enabled { 1.0 } else { 0.0 };

        self.view.label(ids!(greeting)).set_text(cx, &greeting_for(&env.locale));
        self.view.label(ids!(greeting)).apply_over(cx, live!{
            draw_text: { text_style: { font_size: (points) } }
        });
        self.view.label(ids!(caption)).set_text(cx, &caption(env));
        self.view.apply_over(cx, live!{
            align: { x: (align_x), y: 0.5 }
            draw_bg: { outline: (outline) }
        });

        self.environment = Some(env.clone());
        self.view.redraw(cx);
    }
}

impl PreviewCanvasRef {
    /// Re-render under `env`; a no-op if nothing changed
    pub fn set_environment(&self, cx: &mut Cx, env: &PreviewEnvironment) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_environment(cx, env);
        }
    }
}

impl Themeable for PreviewCanvasRef {
    fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.view.apply_over(cx, live!{
                draw_bg: { dark_mode: (dark_mode) }
            });
            inner.view.label(ids!(greeting)).apply_over(cx, live!{
                draw_text: { dark_mode: (dark_mode) }
            });
            inner.view.label(ids!(caption)).apply_over(cx, live!{
                draw_text: { dark_mode: (dark_mode) }
            });
            inner.view.redraw(cx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_settings::{ColorScheme, TextSize};

    #[test]
    fn test_greeting_table() {
        assert_eq!(greeting_for(&Locale::from("en")), "Hello, world!");
        assert_eq!(greeting_for(&Locale::from("ru")), "Привет, мир!");
        assert_eq!(greeting_for(&Locale::from("fr-CA")), "Bonjour le monde !");
        assert_eq!(greeting_for(&Locale::from("ja")), "こんにちは世界！");
    }

    #[test]
    fn test_unknown_locale_shows_identifier() {
        assert_eq!(greeting_for(&Locale::from("sw-KE")), "sw-KE");
    }

    #[test]
    fn test_alignment_follows_direction() {
        assert_eq!(horizontal_align(LayoutDirection::LeftToRight), 0.0);
        assert_eq!(horizontal_align(LayoutDirection::RightToLeft), 1.0);
    }

    #[test]
    fn test_caption() {
        let env = PreviewEnvironment {
            color_scheme: ColorScheme::Dark,
            locale: Locale::from("ar"),
            text_size: TextSize::Medium,
            layout_direction: LayoutDirection::RightToLeft,
            accessibility_enabled: true,
        };
        assert_eq!(caption(&env), "ar · Medium · RTL · accessibility on");
        assert_eq!(caption(&PreviewEnvironment::default()), "en · Large · LTR");
    }
}
