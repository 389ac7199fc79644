//! Prism Studio application: preview canvas beside the settings panel

use makepad_widgets::*;
use parking_lot::Mutex;
use prism_settings::{
    ColorScheme, CommandScreenshot, Locale, LogHaptics, PrismSettingsApp, SettingsPanelWidgetExt,
};
use prism_studio_shell::preferences;
use prism_studio_shell::widgets::preview_canvas::PreviewCanvasWidgetExt;
use prism_studio_shell::{
    create_shared_environment, panel_visibility, settings_params, PreviewEnvironment,
    SharedEnvironment,
};
use prism_ui::{PrismTheme, Themeable, THEME_TRANSITION_DURATION};
use prism_widgets::{PrismApp, StateChangeListener};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::cli::Args;

static CLI_ARGS: OnceLock<Args> = OnceLock::new();

/// Hand the parsed command line to the app before `app_main` runs
pub fn set_cli_args(args: Args) {
    if CLI_ARGS.set(args).is_err() {
        log::warn!("CLI args already set, ignoring");
    }
}

fn cli_args() -> Args {
    CLI_ARGS.get().cloned().unwrap_or_default()
}

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use prism_widgets::theme::*;
    use prism_settings::screen::SettingsPanel;
    use prism_studio_shell::widgets::preview_canvas::PreviewCanvas;

    App = {{App}} {
        ui: <Window> {
            window: { inner_size: vec2(1100, 720) }
            pass: { clear_color: (DARK_BG) }

            body = <View> {
                width: Fill, height: Fill
                flow: Right
                padding: 24
                spacing: 24
                show_bg: true
                draw_bg: {
                    instance dark_mode: 0.0
                    fn pixel(self) -> vec4 {
                        return mix((DARK_BG), (DARK_BG_DARK), self.dark_mode);
                    }
                }

                canvas = <PreviewCanvas> {}

                // Hidden while a screenshot is taken
                panel_slot = <View> {
                    width: Fit, height: Fill
                    flow: Down

                    settings_panel = <SettingsPanel> {}
                }
            }
        }
    }
}

#[derive(Live, LiveHook)]
pub struct App {
    #[live]
    ui: WidgetRef,

    #[rust]
    environment: SharedEnvironment,

    #[rust]
    panel_hidden: Arc<Mutex<bool>>,

    /// Hidden state last applied to the panel slot
    #[rust]
    panel_slot_hidden: bool,

    #[rust]
    theme: PrismTheme,

    #[rust]
    theme_anim_start: Option<f64>,

    /// `None` when preferences are not persisted
    #[rust]
    preferences_path: Option<PathBuf>,
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        prism_widgets::live_design(cx);
        <PrismSettingsApp as PrismApp>::live_design(cx);
        prism_studio_shell::widgets::preview_canvas::live_design(cx);
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        if let Event::Startup = event {
            self.startup(cx);
        }

        if let Event::NextFrame(_) = event {
            self.step_theme_animation(cx);
        }

        self.ui.handle_event(cx, event, &mut Scope::empty());

        // The panel may have flipped the hidden flag (screenshot start or end)
        self.sync_panel_visibility(cx);

        let actions = match event {
            Event::Actions(actions) => actions.as_slice(),
            _ => return,
        };

        let panel = self.ui.settings_panel(ids!(body.panel_slot.settings_panel));
        if panel.environment_changed(actions) {
            self.on_environment_changed(cx);
        }
        if panel.capture_started(actions) {
            log::info!("Screenshot started");
        }
        if let Some(succeeded) = panel.capture_finished(actions) {
            log::info!("Screenshot finished (success: {})", succeeded);
        }
    }
}

impl App {
    fn startup(&mut self, cx: &mut Cx) {
        let args = cli_args();

        let info = PrismSettingsApp::info();
        log::debug!("Hosting {} ({}): {}", info.name, info.id, info.description);

        self.preferences_path = (!args.no_persist).then(preferences::preferences_path);
        let mut env = self
            .preferences_path
            .as_deref()
            .map(preferences::load_or_default)
            .unwrap_or_default();

        if args.dark_mode {
            env.color_scheme = ColorScheme::Dark;
        }
        if let Some(id) = args.locale.as_deref() {
            env.locale = Locale::from(id);
        }

        let locales = args.locale_list();
        if !locales.contains(&env.locale) {
            log::warn!("Locale {} is not among the offered locales", env.locale);
        }

        self.environment = create_shared_environment(env.clone());
        let (hidden, hidden_binding) = panel_visibility();
        self.panel_hidden = hidden;

        let platform = args.platform();
        let panel = self.ui.settings_panel(ids!(body.panel_slot.settings_panel));
        panel.configure(
            cx,
            settings_params(&self.environment, locales),
            hidden_binding,
            platform,
        );
        let screenshot_dir = args
            .screenshot_dir
            .clone()
            .unwrap_or_else(CommandScreenshot::default_output_dir);
        log::info!("Screenshots go to {}", screenshot_dir.display());
        panel.set_capture_services(CommandScreenshot::new(screenshot_dir), LogHaptics);

        self.ui
            .preview_canvas(ids!(body.canvas))
            .set_environment(cx, &env);

        self.theme.set_dark_mode(env.color_scheme.is_dark());
        self.apply_dark_mode(cx, self.theme.dark_mode_anim);

        self.ui.apply_over(cx, live!{
            window: { inner_size: (vec2(args.width as f32, args.height as f32)) }
        });

        self.install_interrupt_handler();
        log::info!("Prism Studio ready ({} platform)", platform);
    }

    /// Save preferences before exiting on Ctrl-C
    fn install_interrupt_handler(&self) {
        let environment = Arc::clone(&self.environment);
        let path = self.preferences_path.clone();
        let result = ctrlc::set_handler(move || {
            log::info!("Interrupted, shutting down");
            if let Some(path) = path.as_deref() {
                let env = environment.lock().clone();
                if let Err(e) = preferences::save_to(path, &env) {
                    log::error!("Failed to save preferences: {:#}", e);
                }
            }
            std::process::exit(0);
        });
        if let Err(e) = result {
            log::warn!("Could not install Ctrl-C handler: {}", e);
        }
    }

    fn on_environment_changed(&mut self, cx: &mut Cx) {
        let env = self.environment.lock().clone();
        log::debug!("Environment changed: {:?}", env);

        self.ui
            .preview_canvas(ids!(body.canvas))
            .set_environment(cx, &env);

        if self.theme.set_target(env.color_scheme.is_dark()) {
            self.theme_anim_start = Some(Cx::time_now());
            cx.new_next_frame();
        }

        self.save_preferences(&env);
    }

    fn save_preferences(&self, env: &PreviewEnvironment) {
        if let Some(path) = self.preferences_path.as_deref() {
            if let Err(e) = preferences::save_to(path, env) {
                log::error!("Failed to save preferences: {:#}", e);
            }
        }
    }

    fn step_theme_animation(&mut self, cx: &mut Cx) {
        let Some(start) = self.theme_anim_start else {
            return;
        };
        let running = self
            .theme
            .update_animation(Cx::time_now() - start, THEME_TRANSITION_DURATION);
        self.apply_dark_mode(cx, self.theme.dark_mode_anim);
        if running {
            cx.new_next_frame();
        } else {
            self.theme_anim_start = None;
        }
    }

    fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.ui.view(ids!(body)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.ui
            .preview_canvas(ids!(body.canvas))
            .apply_dark_mode(cx, dark_mode);
        self.ui
            .settings_panel(ids!(body.panel_slot.settings_panel))
            .on_dark_mode_change(cx, dark_mode);
        self.ui.redraw(cx);
    }

    fn sync_panel_visibility(&mut self, cx: &mut Cx) {
        let hidden = *self.panel_hidden.lock();
        if hidden == self.panel_slot_hidden {
            return;
        }
        log::debug!("Settings panel {}", if hidden { "hidden" } else { "shown" });
        self.ui
            .view(ids!(body.panel_slot))
            .set_visible(cx, !hidden);
        self.panel_slot_hidden = hidden;
        self.ui.redraw(cx);
    }
}

app_main!(App);
