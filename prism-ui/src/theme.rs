//! Runtime Theme State for Prism UI
//!
//! Complements the static `live_design!` constants in
//! `prism-widgets/src/theme.rs`. `PrismTheme` tracks whether dark mode is on
//! and the animated value (0.0 light to 1.0 dark) that shaders mix with.
//!
//! ## Animation Support
//!
//! ```rust,ignore
//! // On change
//! theme.set_target(true);
//! let anim_start = Cx::time_now();
//!
//! // In NextFrame handler
//! let elapsed = Cx::time_now() - anim_start;
//! if theme.update_animation(elapsed, THEME_TRANSITION_DURATION) {
//!     apply_theme(cx, theme.dark_mode_anim);
//!     cx.new_next_frame();
//! }
//! ```

/// Duration of theme transition animation in seconds
pub const THEME_TRANSITION_DURATION: f64 = 0.25;

/// Runtime theme state for Prism Studio.
#[derive(Clone, Debug)]
pub struct PrismTheme {
    /// Whether dark mode is enabled
    pub dark_mode: bool,

    /// Animation value (0.0 = light, 1.0 = dark).
    /// Use this value in shader `dark_mode` instance variables.
    pub dark_mode_anim: f64,

    /// Value the running transition started from
    anim_start: f64,
}

impl PrismTheme {
    /// Create a new theme in light mode
    pub fn new() -> Self {
        Self::with_dark_mode(false)
    }

    /// Create a theme with specified dark mode state, no transition pending
    pub fn with_dark_mode(dark: bool) -> Self {
        let value = if dark { 1.0 } else { 0.0 };
        Self {
            dark_mode: dark,
            dark_mode_anim: value,
            anim_start: value,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Start a transition towards `dark`.
    ///
    /// Returns `false` if the theme is already heading there.
    pub fn set_target(&mut self, dark: bool) -> bool {
        if self.dark_mode == dark {
            return false;
        }
        self.dark_mode = dark;
        self.anim_start = self.dark_mode_anim;
        true
    }

    /// Set dark mode state immediately (no animation)
    pub fn set_dark_mode(&mut self, dark: bool) {
        *self = Self::with_dark_mode(dark);
    }

    /// Update the animation value from the time elapsed since `set_target`.
    ///
    /// Returns `true` while the transition is in progress.
    pub fn update_animation(&mut self, elapsed: f64, duration: f64) -> bool {
        let target = self.target_value();

        if elapsed >= duration || duration <= 0.0 {
            self.dark_mode_anim = target;
            self.anim_start = target;
            return false;
        }

        // Ease-out cubic
        let t = (elapsed / duration).clamp(0.0, 1.0);
        let ease_t = 1.0 - (1.0 - t).powi(3);
        self.dark_mode_anim = self.anim_start + (target - self.anim_start) * ease_t;
        true
    }

    /// Value `dark_mode_anim` settles on when the transition completes
    pub fn target_value(&self) -> f64 {
        if self.dark_mode {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for PrismTheme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default() {
        let theme = PrismTheme::default();
        assert!(!theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 0.0);
    }

    #[test]
    fn test_theme_set_dark_mode() {
        let mut theme = PrismTheme::default();

        theme.set_dark_mode(true);
        assert!(theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 1.0);

        theme.set_dark_mode(false);
        assert!(!theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 0.0);
    }

    #[test]
    fn test_set_target_reports_change() {
        let mut theme = PrismTheme::default();
        assert!(theme.set_target(true));
        assert!(!theme.set_target(true));
        // Only the target moved, the animated value waits for update_animation
        assert_eq!(theme.dark_mode_anim, 0.0);
    }

    #[test]
    fn test_theme_animation() {
        let mut theme = PrismTheme::default();
        theme.set_target(true);

        let in_progress = theme.update_animation(0.125, THEME_TRANSITION_DURATION);
        assert!(in_progress);
        assert!(theme.dark_mode_anim > 0.0);
        assert!(theme.dark_mode_anim < 1.0);

        let in_progress = theme.update_animation(0.25, THEME_TRANSITION_DURATION);
        assert!(!in_progress);
        assert_eq!(theme.dark_mode_anim, 1.0);
    }

    #[test]
    fn test_reversal_starts_from_current_value() {
        let mut theme = PrismTheme::default();
        theme.set_target(true);
        theme.update_animation(0.1, THEME_TRANSITION_DURATION);
        let midway = theme.dark_mode_anim;

        theme.set_target(false);
        theme.update_animation(0.0, THEME_TRANSITION_DURATION);
        assert!((theme.dark_mode_anim - midway).abs() < 1e-9);

        theme.update_animation(1.0, THEME_TRANSITION_DURATION);
        assert_eq!(theme.dark_mode_anim, 0.0);
    }
}
