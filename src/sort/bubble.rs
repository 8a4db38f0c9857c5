use super::{Highlight, Sorter};

/// Adjacent-pair passes; one frame per comparison whether or not it swaps.
#[derive(Clone, Debug, Default)]
pub struct BubbleSort {
    pass: usize,
    j: usize,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sorter for BubbleSort {
    fn step(&mut self, values: &mut [u32]) -> Option<Highlight> {
        let n = values.len();
        if n < 2 || self.pass >= n - 1 {
            return None;
        }
        let j = self.j;
        if values[j] > values[j + 1] {
            values.swap(j, j + 1);
        }
        self.j += 1;
        if self.j >= n - 1 - self.pass {
            self.pass += 1;
            self.j = 0;
        }
        Some(Highlight::pair(j, j + 1))
    }
}
