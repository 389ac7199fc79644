//! Widget modules for the Prism Studio shell

pub mod preview_canvas;
