use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::Config;

/// The values being sorted, drawn as bars.
///
/// `bar_width` is derived from the logical window width so the bars fill it.
/// It only ever grows: a regenerate with more elements keeps the old width,
/// the same clamp the bars get when they no longer fit.
#[derive(Clone, Debug)]
pub struct ArrayModel {
    values: Vec<u32>,
    bar_width: u32,
    gap: u32,
    window_width: u32,
    value_range: u32,
    sorted: bool,
}

impl ArrayModel {
    pub fn new(config: &Config) -> Self {
        ArrayModel {
            values: Vec::new(),
            bar_width: config.initial_bar_width,
            gap: config.gap,
            window_width: config.window_width,
            value_range: config.value_range.max(1),
            sorted: false,
        }
    }

    pub fn from_values(config: &Config, values: Vec<u32>) -> Self {
        let mut m = ArrayModel::new(config);
        m.values = values;
        m.update_bar_width();
        m
    }

    /// Replace the contents with `count` values drawn uniformly from `[1, value_range]`.
    pub fn generate<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.values = (0..count)
            .map(|_| rng.gen_range(1..=self.value_range))
            .collect();
        self.update_bar_width();
        self.sorted = false;
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.values.shuffle(rng);
        self.sorted = false;
    }

    fn update_bar_width(&mut self) {
        let n = self.values.len();
        if n == 0 {
            return;
        }
        let n: u32 = n.try_into().unwrap_or(u32::MAX);
        let free = self.window_width.saturating_sub(n.saturating_mul(self.gap));
        self.bar_width = self.bar_width.max(free / n);
    }

    pub fn get(&self, i: usize) -> Option<u32> {
        self.values.get(i).copied()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Sorters swap and overwrite elements through this slice; its length is fixed.
    pub fn values_mut(&mut self) -> &mut [u32] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bar_width(&self) -> u32 {
        self.bar_width
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn mark_sorted(&mut self) {
        self.sorted = true;
    }

    pub fn clear_sorted(&mut self) {
        self.sorted = false;
    }
}
