use crate::array::ArrayModel;
use crate::canvas::Surface;
use crate::config::Config;
use crate::sort::{Algorithm, Highlight, Sorter};
use crate::ui::render::frame::{render_frame, render_reveal};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

// small constants reused by rendering code
pub const MODELINE_LINES: usize = 1;
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;

/// A sort in progress.
pub struct SortRun {
    pub algorithm: Algorithm,
    pub sorter: Box<dyn Sorter>,
    pub started: Instant,
    pub steps: u64,
}

/// What the last finished sort did, kept for the status line and the timer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub steps: u64,
    pub elapsed: f64,
}

pub enum Phase {
    Idle,
    Sorting(SortRun),
    // success sweep after a sort, `revealed` bars drawn so far
    Revealing { revealed: usize },
}

/// Application context: the array and everything needed to animate it.
pub struct Model {
    pub config: Config,
    pub array: ArrayModel,
    pub rng: StdRng,
    pub phase: Phase,
    pub highlight: Highlight,
    pub elapsed: Option<f64>,
    pub last_run: Option<RunSummary>,
    pub screen_width: usize,
    pub screen_height: usize,
}

/// Startup state: `config.count` random values, idle.
pub fn initial_model(config: Config) -> Model {
    initial_model_with_rng(config, StdRng::from_entropy())
}

pub fn initial_model_with_rng(config: Config, mut rng: StdRng) -> Model {
    let mut array = ArrayModel::new(&config);
    array.generate(config.count, &mut rng);
    Model {
        config,
        array,
        rng,
        phase: Phase::Idle,
        highlight: Highlight::NONE,
        elapsed: None,
        last_run: None,
        screen_width: DEFAULT_WIDTH,
        screen_height: DEFAULT_HEIGHT,
    }
}

impl Model {
    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_update(self, msg);
    }

    pub fn is_sorting(&self) -> bool {
        matches!(self.phase, Phase::Sorting(_))
    }

    /// A sort or its reveal is animating.
    pub fn is_busy(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Delay before the next tick: the settle delay between sort frames, the
    /// reveal delay during the sweep, and the frame rate cap while idle.
    pub fn next_tick_delay(&self) -> Duration {
        match self.phase {
            Phase::Sorting(_) => self.config.settle_delay,
            Phase::Revealing { .. } => self.config.reveal_delay,
            Phase::Idle => self.config.frame_interval(),
        }
    }

    pub fn mode(&self) -> String {
        match &self.phase {
            Phase::Sorting(run) => format!("sorting {}", run.algorithm.name()),
            Phase::Revealing { .. } => "sorted".to_string(),
            Phase::Idle if self.array.is_sorted() => "sorted".to_string(),
            Phase::Idle => "idle".to_string(),
        }
    }

    /// Steps taken by the running sort, or by the last one.
    pub fn steps(&self) -> Option<(Algorithm, u64)> {
        match &self.phase {
            Phase::Sorting(run) => Some((run.algorithm, run.steps)),
            _ => self.last_run.map(|r| (r.algorithm, r.steps)),
        }
    }

    /// Draw the current frame onto `surface`.
    pub fn draw(&self, surface: &mut impl Surface) {
        match self.phase {
            Phase::Revealing { revealed } => {
                render_reveal(surface, &self.array, &self.config, revealed, self.elapsed)
            }
            // a finished sort keeps its sweep on screen
            Phase::Idle if self.array.is_sorted() => render_reveal(
                surface,
                &self.array,
                &self.config,
                self.array.len(),
                self.elapsed,
            ),
            _ => render_frame(
                surface,
                &self.array,
                &self.config,
                self.highlight,
                self.elapsed,
            ),
        }
    }

    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Recorder;
    use crate::ui::render::styles::{ACCENT, SUCCESS};

    fn seeded(values: Vec<u32>) -> Model {
        let mut m = initial_model_with_rng(Config::default(), StdRng::seed_from_u64(11));
        m.array = ArrayModel::from_values(&m.config, values);
        m
    }

    #[test]
    fn initial_model_generates_configured_count() {
        let m = initial_model_with_rng(Config::default(), StdRng::seed_from_u64(5));
        assert_eq!(m.array.len(), 100);
        assert!(!m.array.is_sorted());
        assert!(!m.is_busy());
        assert_eq!(m.mode(), "idle");
        assert_eq!(m.elapsed, None);
    }

    #[test]
    fn tick_delay_follows_phase() {
        let mut m = seeded(vec![2, 1]);
        assert_eq!(m.next_tick_delay(), m.config.frame_interval());
        m.phase = Phase::Revealing { revealed: 0 };
        assert_eq!(m.next_tick_delay(), Duration::from_millis(5));
        m.update(crate::ui::Msg::Rune('b'));
        assert!(m.is_sorting());
        assert_eq!(m.next_tick_delay(), Duration::ZERO);
    }

    #[test]
    fn sorted_idle_frame_is_all_green() {
        let mut m = seeded(vec![1, 2, 3]);
        m.array.mark_sorted();
        let mut r = Recorder::new();
        m.draw(&mut r);
        assert!(r.rects().all(|(_, c)| *c == SUCCESS));
    }

    #[test]
    fn unsorted_idle_frame_shows_current_highlight() {
        let mut m = seeded(vec![1, 2, 3]);
        m.highlight = Highlight::one(1);
        let mut r = Recorder::new();
        m.draw(&mut r);
        assert_eq!(r.rects().filter(|(_, c)| **c == ACCENT).count(), 1);
    }
}
