//! Terminal user interface: formatting helpers and the frame renderer

pub mod colors;
pub mod display;
pub mod renderer;

// Re-export commonly used functions
pub use colors::*;
pub use display::*;
pub use renderer::render_ui;
