//! # Prism UI - runtime UI state shared by the shell and apps
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`theme`] | Runtime dark mode state with animated transitions |
//! | [`traits`] | Common widget interfaces |
//!
//! Static colors live in `prism_widgets::theme`; this crate only tracks the
//! value that gets fed into the shaders' `dark_mode` instance.

pub mod theme;
pub mod traits;

pub use theme::{PrismTheme, THEME_TRANSITION_DURATION};
pub use traits::Themeable;
