use crate::array::ArrayModel;
use crate::canvas::{Rect, Rgb, Surface};
use crate::config::Config;
use crate::sort::Highlight;
use crate::ui::render::styles::{ACCENT, BASE, SUCCESS, TIMER};

pub fn timer_text(elapsed: f64) -> String {
    format!("Elapsed time {elapsed:0.2} seconds")
}

fn bar_rect(array: &ArrayModel, config: &Config, i: usize, value: u32) -> Rect {
    let stride = u64::from(array.bar_width()) + u64::from(array.gap());
    let x: i32 = (i as u64)
        .saturating_mul(stride)
        .try_into()
        .unwrap_or(i32::MAX);
    let bottom: i64 = config.bottom_line.into();
    let y: i32 = (bottom - i64::from(value))
        .try_into()
        .unwrap_or(i32::MIN);
    Rect::new(x, y, array.bar_width(), value)
}

fn draw_bars(
    surface: &mut impl Surface,
    array: &ArrayModel,
    config: &Config,
    color_of: impl Fn(usize) -> Rgb,
) {
    for (i, &value) in array.values().iter().enumerate() {
        surface.fill_rect(bar_rect(array, config, i, value), color_of(i));
    }
}

/// Draw one frame: every bar, highlighted bars in the accent color, and the
/// timer when a sort is running or has just finished.
///
/// Highlighted bars are painted in a second pass so they end up on top when
/// the surface merges several bars into one cell. Highlights outside the
/// array are ignored.
pub fn render_frame(
    surface: &mut impl Surface,
    array: &ArrayModel,
    config: &Config,
    highlight: Highlight,
    elapsed: Option<f64>,
) {
    surface.clear();
    draw_bars(surface, array, config, |_| BASE);
    for i in [highlight.a, highlight.b].into_iter().flatten() {
        if let Some(value) = array.get(i) {
            surface.fill_rect(bar_rect(array, config, i, value), ACCENT);
        }
    }
    if let Some(t) = elapsed {
        surface.draw_text(&timer_text(t), config.timer_anchor(), TIMER);
    }
}

/// The success sweep: the first `revealed` bars in green, the rest as plain bars.
pub fn render_reveal(
    surface: &mut impl Surface,
    array: &ArrayModel,
    config: &Config,
    revealed: usize,
    elapsed: Option<f64>,
) {
    surface.clear();
    draw_bars(surface, array, config, |i| {
        if i < revealed {
            SUCCESS
        } else {
            BASE
        }
    });
    if let Some(t) = elapsed {
        surface.draw_text(&timer_text(t), config.timer_anchor(), TIMER);
    }
}
