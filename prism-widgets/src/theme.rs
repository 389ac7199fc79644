//! Static theme for Prism Studio
//!
//! Font aliases and color constants shared by every `live_design!` block in
//! the workspace. Colors are written as `vec4` to avoid hex parsing issues.
//!
//! Each color that changes with the color scheme comes in a pair, `NAME` and
//! `NAME_DARK`, mixed in shaders with an instance `dark_mode` value:
//!
//! ```rust,ignore
//! draw_bg: {
//!     instance dark_mode: 0.0
//!     fn pixel(self) -> vec4 {
//!         return mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode);
//!     }
//! }
//! ```

use makepad_widgets::*;

live_design! {
    use link::theme::*;

    // Fonts
    pub FONT_REGULAR = <THEME_FONT_REGULAR> {}
    pub FONT_MEDIUM = <THEME_FONT_REGULAR> {}
    pub FONT_SEMIBOLD = <THEME_FONT_BOLD> {}
    pub FONT_BOLD = <THEME_FONT_BOLD> {}

    // Backgrounds
    pub DARK_BG = vec4(0.933, 0.941, 0.953, 1.0)        // slate-150
    pub DARK_BG_DARK = vec4(0.067, 0.090, 0.125, 1.0)   // slate-950
    pub PANEL_BG = vec4(0.976, 0.980, 0.984, 1.0)       // slate-50
    pub PANEL_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)  // slate-800
    pub HOVER_BG = vec4(0.0, 0.0, 0.0, 0.05)
    pub TRANSPARENT = vec4(0.0, 0.0, 0.0, 0.0)

    // Borders
    pub BORDER = vec4(0.878, 0.906, 0.925, 1.0)         // slate-200
    pub BORDER_DARK = vec4(0.278, 0.337, 0.412, 1.0)    // slate-600

    // Text
    pub TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    pub TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    pub TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    pub TEXT_SECONDARY_DARK = vec4(0.580, 0.639, 0.722, 1.0)

    // Slate scale
    pub SLATE_50 = vec4(0.976, 0.980, 0.984, 1.0)
    pub SLATE_200 = vec4(0.886, 0.910, 0.941, 1.0)
    pub SLATE_300 = vec4(0.796, 0.835, 0.878, 1.0)
    pub SLATE_400 = vec4(0.580, 0.639, 0.702, 1.0)
    pub SLATE_500 = vec4(0.392, 0.455, 0.545, 1.0)
    pub SLATE_600 = vec4(0.278, 0.337, 0.412, 1.0)
    pub SLATE_700 = vec4(0.204, 0.224, 0.275, 1.0)
    pub SLATE_800 = vec4(0.118, 0.161, 0.231, 1.0)

    // Gray scale
    pub GRAY_100 = vec4(0.953, 0.957, 0.961, 1.0)
    pub GRAY_300 = vec4(0.820, 0.835, 0.859, 1.0)
    pub GRAY_500 = vec4(0.420, 0.447, 0.502, 1.0)
    pub GRAY_700 = vec4(0.216, 0.255, 0.318, 1.0)

    // Accents
    pub ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)    // blue-500
    pub BLUE_600 = vec4(0.145, 0.388, 0.922, 1.0)
    pub BLUE_700 = vec4(0.114, 0.306, 0.847, 1.0)
    pub ACCENT_RED = vec4(0.937, 0.267, 0.267, 1.0)
    pub EMERALD_500 = vec4(0.063, 0.725, 0.506, 1.0)
    pub AMBER_500 = vec4(0.961, 0.624, 0.043, 1.0)
    pub WHITE = vec4(1.0, 1.0, 1.0, 1.0)
}
