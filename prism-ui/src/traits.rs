//! Base Widget Traits for Prism UI
//!
//! ```rust,ignore
//! impl Themeable for PreviewCanvasRef {
//!     fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
//!         if let Some(mut inner) = self.borrow_mut() {
//!             inner.view.apply_over(cx, live!{
//!                 draw_bg: { dark_mode: (dark_mode) }
//!             });
//!         }
//!     }
//! }
//! ```

use makepad_widgets::Cx;

/// Trait for widgets that support dark mode theming.
///
/// The `dark_mode` value ranges from 0.0 (light) to 1.0 (dark); intermediate
/// values occur during animated transitions.
pub trait Themeable {
    /// Apply dark mode value to the widget.
    fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64);
}
