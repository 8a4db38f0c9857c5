// Render module: frame drawing, the status line, and the full view assembled from both.

pub mod frame;
pub mod full;
pub mod modeline;
pub mod styles;
pub mod util;

pub use frame::{render_frame, render_reveal, timer_text};
pub use full::render_full;
pub use modeline::render_modeline;
