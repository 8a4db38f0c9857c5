// UI module root: split implementation into focused submodules under `ui/`

pub mod model;
pub mod render;
pub mod run;
pub mod update;

// Re-export commonly used symbols so call sites can use `crate::ui::initial_model`.
pub use model::{Model, Phase, RunSummary, initial_model, initial_model_with_rng};
pub use render::{render_full, render_modeline};
pub use run::run;
pub use update::handle_update;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    KeyEsc,
    Rune(char),
    /// Advance the animation by one frame.
    Tick,
}
