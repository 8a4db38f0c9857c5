use super::{Highlight, Sorter};

// Pending work for the top-down recursion, popped from the back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
    Sort { lo: usize, hi: usize },
    // a recursive call just returned
    Boundary,
    Merge { lo: usize, mid: usize, hi: usize },
}

/// Top-down merge sort over half-open ranges.
#[derive(Clone, Debug)]
pub struct MergeSort {
    stack: Vec<Frame>,
    active: Option<Merge>,
}

impl MergeSort {
    pub fn new(len: usize) -> Self {
        MergeSort {
            stack: vec![Frame::Sort { lo: 0, hi: len }],
            active: None,
        }
    }
}

impl Sorter for MergeSort {
    fn step(&mut self, values: &mut [u32]) -> Option<Highlight> {
        loop {
            if let Some(m) = self.active.as_mut() {
                if let Some(h) = m.step(values) {
                    return Some(h);
                }
                self.active = None;
            }
            match self.stack.pop()? {
                Frame::Sort { lo, hi } => {
                    if hi.saturating_sub(lo) < 2 {
                        continue;
                    }
                    let mid = (lo + hi) / 2;
                    self.stack.push(Frame::Merge { lo, mid, hi });
                    self.stack.push(Frame::Boundary);
                    self.stack.push(Frame::Sort { lo: mid, hi });
                    self.stack.push(Frame::Boundary);
                    self.stack.push(Frame::Sort { lo, hi: mid });
                }
                Frame::Boundary => return Some(Highlight::NONE),
                Frame::Merge { lo, mid, hi } => {
                    self.active = Some(Merge::new(values, lo, mid, hi));
                }
            }
        }
    }

    fn cancel(&mut self, values: &mut [u32]) {
        if let Some(m) = self.active.take() {
            m.restore(values);
        }
        self.stack.clear();
    }
}

/// One merge of `[lo, mid)` and `[mid, hi)`, placing one element per step.
///
/// Both halves are snapshotted up front and read through cursors, so the
/// slice can be overwritten from `lo` onward without losing anything.
#[derive(Clone, Debug)]
pub struct Merge {
    left: Vec<u32>,
    right: Vec<u32>,
    lo: usize,
    mid: usize,
    li: usize,
    ri: usize,
    k: usize,
    finished: bool,
}

impl Merge {
    pub fn new(values: &[u32], lo: usize, mid: usize, hi: usize) -> Self {
        Merge {
            left: values[lo..mid].to_vec(),
            right: values[mid..hi].to_vec(),
            lo,
            mid,
            li: 0,
            ri: 0,
            k: lo,
            finished: false,
        }
    }

    pub fn step(&mut self, values: &mut [u32]) -> Option<Highlight> {
        let left_open = self.li < self.left.len();
        let right_open = self.ri < self.right.len();
        if left_open && right_open {
            // ties take from the left run, keeping the sort stable
            if self.left[self.li] <= self.right[self.ri] {
                values[self.k] = self.left[self.li];
                self.li += 1;
            } else {
                values[self.k] = self.right[self.ri];
                self.ri += 1;
            }
            self.k += 1;
            return Some(Highlight::pair(self.lo + self.li, self.mid + self.ri));
        }
        if left_open {
            values[self.k] = self.left[self.li];
            self.li += 1;
            self.k += 1;
            return Some(Highlight::pair(self.lo + self.li, self.k));
        }
        if right_open {
            values[self.k] = self.right[self.ri];
            let h = Highlight::pair(self.lo + self.li, self.k);
            self.ri += 1;
            self.k += 1;
            return Some(h);
        }
        if !self.finished {
            self.finished = true;
            return Some(Highlight::NONE);
        }
        None
    }

    /// Write the unconsumed tails of both runs into `[k, hi)`, left first.
    ///
    /// Slots before `k` already hold consumed values, so afterwards the range
    /// has the same values it had when the merge began.
    pub fn restore(&self, values: &mut [u32]) {
        let rest = self.left[self.li..]
            .iter()
            .chain(&self.right[self.ri..]);
        for (slot, &v) in values[self.k..].iter_mut().zip(rest) {
            *slot = v;
        }
    }
}

/// Merge the sorted runs `[lo, mid)` and `[mid, hi)` in place.
pub fn merge(values: &mut [u32], lo: usize, mid: usize, hi: usize) {
    let mut m = Merge::new(values, lo, mid, hi);
    while m.step(values).is_some() {}
}
