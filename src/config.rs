use std::time::Duration;

// Frames are laid out in this logical window and scaled onto the terminal grid.
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

/// Startup constants for the visualizer. There is no file or CLI layer; the
/// `Default` impl is the configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    /// y coordinate bars stand on
    pub bottom_line: u32,
    pub gap: u32,
    pub initial_bar_width: u32,
    pub count: usize,
    pub value_range: u32,
    /// idle redraw rate
    pub fps: u32,
    /// pause before each sort frame
    pub settle_delay: Duration,
    /// pause between bars of the reveal animation
    pub reveal_delay: Duration,
    pub timer_y: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            bottom_line: 700,
            gap: 0,
            initial_bar_width: 1,
            count: 100,
            value_range: 500,
            fps: 144,
            settle_delay: Duration::ZERO,
            reveal_delay: Duration::from_millis(5),
            timer_y: 100,
        }
    }
}

impl Config {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn timer_anchor(&self) -> (i32, i32) {
        let x: i32 = (self.window_width / 2).try_into().unwrap_or(i32::MAX);
        (x, self.timer_y)
    }
}
