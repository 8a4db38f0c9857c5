use crate::canvas::Rgb;
use lipgloss::{Color, Style};
use once_cell::sync::Lazy;

// Frame palette
pub const BASE: Rgb = Rgb(255, 255, 255);
pub const ACCENT: Rgb = Rgb(255, 0, 0);
pub const SUCCESS: Rgb = Rgb(0, 255, 0);
pub const TIMER: Rgb = SUCCESS;

// Styles kept local to render module
pub static STYLE_MODELINE: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(95, 95, 95))
        .foreground(Color::from_rgb(255, 255, 255))
});
pub static STYLE_KEY: Lazy<Style> = Lazy::new(|| {
    STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
});
pub static STYLE_STATUS: Lazy<Style> = Lazy::new(|| {
    STYLE_MODELINE
        .clone()
        .background(Color::from_rgb(101, 101, 101))
        .bold(true)
});
pub static STYLE_STATS: Lazy<Style> = Lazy::new(|| STYLE_MODELINE.clone().faint(true));
