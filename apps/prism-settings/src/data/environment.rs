//! Preview environment values
//!
//! The closed value sets the settings panel edits: color scheme, layout
//! direction, text size category and locale identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    /// Shader mix value (0.0 = light, 1.0 = dark)
    pub fn dark_mode_value(self) -> f64 {
        match self {
            ColorScheme::Light => 0.0,
            ColorScheme::Dark => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_right_to_left(self) -> bool {
        self == LayoutDirection::RightToLeft
    }
}

/// Ordered text size categories, smallest first.
///
/// The slider position of a category is its ordinal; the stride between
/// neighbouring categories is [`TextSize::STRIDE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSize {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
    Accessibility1,
    Accessibility2,
    Accessibility3,
    Accessibility4,
    Accessibility5,
}

impl TextSize {
    pub const ALL: [TextSize; 12] = [
        TextSize::ExtraSmall,
        TextSize::Small,
        TextSize::Medium,
        TextSize::Large,
        TextSize::ExtraLarge,
        TextSize::ExtraExtraLarge,
        TextSize::ExtraExtraExtraLarge,
        TextSize::Accessibility1,
        TextSize::Accessibility2,
        TextSize::Accessibility3,
        TextSize::Accessibility4,
        TextSize::Accessibility5,
    ];

    /// Slider distance between two neighbouring categories
    pub const STRIDE: f64 = 1.0;

    pub const fn smallest() -> TextSize {
        TextSize::ExtraSmall
    }

    pub const fn largest() -> TextSize {
        TextSize::Accessibility5
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Slider position of this category
    pub fn position(self) -> f64 {
        self.index() as f64 * Self::STRIDE
    }

    /// Category nearest to a slider position, clamped to the ends
    pub fn from_position(position: f64) -> TextSize {
        if !position.is_finite() {
            return if position > 0.0 {
                Self::largest()
            } else {
                Self::smallest()
            };
        }
        let max = (Self::ALL.len() - 1) as f64;
        let index = (position / Self::STRIDE).round().clamp(0.0, max) as usize;
        Self::ALL[index]
    }

    /// Move `steps` categories up (positive) or down (negative), saturating
    pub fn offset(self, steps: i32) -> TextSize {
        Self::from_position(self.position() + f64::from(steps) * Self::STRIDE)
    }

    pub fn larger(self) -> TextSize {
        self.offset(1)
    }

    pub fn smaller(self) -> TextSize {
        self.offset(-1)
    }

    pub fn is_accessibility_size(self) -> bool {
        self >= TextSize::Accessibility1
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TextSize::ExtraSmall => "Extra Small",
            TextSize::Small => "Small",
            TextSize::Medium => "Medium",
            TextSize::Large => "Large",
            TextSize::ExtraLarge => "Extra Large",
            TextSize::ExtraExtraLarge => "Extra Extra Large",
            TextSize::ExtraExtraExtraLarge => "Extra Extra Extra Large",
            TextSize::Accessibility1 => "Accessibility Medium",
            TextSize::Accessibility2 => "Accessibility Large",
            TextSize::Accessibility3 => "Accessibility Extra Large",
            TextSize::Accessibility4 => "Accessibility Extra Extra Large",
            TextSize::Accessibility5 => "Accessibility Extra Extra Extra Large",
        }
    }

    /// Body text size in points for this category
    pub fn body_points(self) -> f64 {
        match self {
            TextSize::ExtraSmall => 14.0,
            TextSize::Small => 15.0,
            TextSize::Medium => 16.0,
            TextSize::Large => 17.0,
            TextSize::ExtraLarge => 19.0,
            TextSize::ExtraExtraLarge => 21.0,
            TextSize::ExtraExtraExtraLarge => 23.0,
            TextSize::Accessibility1 => 28.0,
            TextSize::Accessibility2 => 33.0,
            TextSize::Accessibility3 => 40.0,
            TextSize::Accessibility4 => 47.0,
            TextSize::Accessibility5 => 53.0,
        }
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Locale identifier such as `en` or `pt-BR`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    pub fn identifier(&self) -> &str {
        &self.0
    }

    /// Language part of the identifier (`pt` for `pt-BR`)
    pub fn language(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or(&self.0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(identifier: &str) -> Self {
        Self::new(identifier)
    }
}

impl From<String> for Locale {
    fn from(identifier: String) -> Self {
        Self(identifier)
    }
}
