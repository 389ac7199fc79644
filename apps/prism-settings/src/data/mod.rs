//! Data layer for the settings panel

pub mod binding;
pub mod environment;

pub use binding::{project, Binding};
pub use environment::{ColorScheme, LayoutDirection, Locale, TextSize};
