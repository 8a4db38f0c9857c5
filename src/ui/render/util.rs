use crate::ui::model::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MODELINE_LINES, Model};

/// Terminal size to lay out against, falling back to 80x24 before the first
/// size message arrives.
pub fn screen_dims(m: &Model) -> (usize, usize) {
    let width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let height = if m.screen_height > 0 {
        m.screen_height
    } else {
        DEFAULT_HEIGHT
    };
    (width, height)
}

/// Rows left for the bars once the status line is placed.
pub fn canvas_rows(height: usize) -> usize {
    height.saturating_sub(MODELINE_LINES)
}
