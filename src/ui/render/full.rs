use crate::canvas::TermCanvas;
use crate::ui::model::Model;
use crate::ui::render::modeline::render_modeline;
use crate::ui::render::util::{canvas_rows, screen_dims};

/// Present the current frame: the rasterized bars above the status line.
pub fn render_full(m: &Model) -> String {
    let (width, height) = screen_dims(m);
    let mut canvas = TermCanvas::new(
        width,
        canvas_rows(height),
        m.config.window_width,
        m.config.window_height,
    );
    m.draw(&mut canvas);
    let mut lines = canvas.to_lines();
    lines.push(render_modeline(m, width));
    lines.join("\n")
}
