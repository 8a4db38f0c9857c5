use super::{Highlight, Sorter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
    // inclusive bounds
    Sort { lo: usize, hi: usize },
    // both halves of a partitioned range are done
    Settled,
}

/// Quick sort with the Lomuto partition scheme.
#[derive(Clone, Debug)]
pub struct QuickSort {
    stack: Vec<Frame>,
    active: Option<Partition>,
}

impl QuickSort {
    pub fn new(len: usize) -> Self {
        let stack = match len {
            0 => Vec::new(),
            n => vec![Frame::Sort { lo: 0, hi: n - 1 }],
        };
        QuickSort {
            stack,
            active: None,
        }
    }
}

impl Sorter for QuickSort {
    fn step(&mut self, values: &mut [u32]) -> Option<Highlight> {
        loop {
            if let Some(p) = self.active.as_mut() {
                match p.step(values) {
                    PartitionStep::Compared(h) => return Some(h),
                    PartitionStep::Placed(pivot) => {
                        let (lo, hi) = (p.lo, p.hi);
                        self.active = None;
                        self.stack.push(Frame::Settled);
                        self.stack.push(Frame::Sort { lo: pivot + 1, hi });
                        if pivot > lo {
                            self.stack.push(Frame::Sort { lo, hi: pivot - 1 });
                        }
                    }
                }
            }
            match self.stack.pop()? {
                Frame::Sort { lo, hi } if lo < hi => {
                    self.active = Some(Partition::new(values, lo, hi));
                }
                Frame::Sort { .. } => {}
                Frame::Settled => return Some(Highlight::NONE),
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartitionStep {
    /// `values[j]` was compared with the pivot; highlight `(i, j)`.
    Compared(Highlight),
    /// The pivot was swapped into its final index.
    Placed(usize),
}

/// Lomuto partition of `values[lo..=hi]` around `values[hi]`.
///
/// `store` is the next slot of the low side (the classic `i + 1`), so the
/// low side is `[lo, store)` and elements `<=` the pivot are swapped into it.
#[derive(Clone, Debug)]
pub struct Partition {
    lo: usize,
    hi: usize,
    pivot: u32,
    store: usize,
    scan: usize,
}

impl Partition {
    pub fn new(values: &[u32], lo: usize, hi: usize) -> Self {
        Partition {
            lo,
            hi,
            pivot: values[hi],
            store: lo,
            scan: lo,
        }
    }

    pub fn step(&mut self, values: &mut [u32]) -> PartitionStep {
        if self.scan < self.hi {
            let j = self.scan;
            if values[j] <= self.pivot {
                values.swap(self.store, j);
                self.store += 1;
            }
            self.scan += 1;
            return PartitionStep::Compared(Highlight {
                a: self.store.checked_sub(1),
                b: Some(j),
            });
        }
        values.swap(self.store, self.hi);
        PartitionStep::Placed(self.store)
    }
}

/// Partition `values[lo..=hi]` and return the pivot's final index.
pub fn partition(values: &mut [u32], lo: usize, hi: usize) -> usize {
    let mut p = Partition::new(values, lo, hi);
    loop {
        if let PartitionStep::Placed(pivot) = p.step(values) {
            return pivot;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{Algorithm, trace};
    use proptest::prelude::*;

    #[test]
    fn lomuto_layout_with_last_element_pivot() {
        let mut v = vec![4, 2, 7, 1, 9, 3];
        let p = partition(&mut v, 0, 5);
        assert_eq!(p, 2);
        assert_eq!(v, vec![2, 1, 3, 4, 9, 7]);
    }

    #[test]
    fn first_partition_frames_highlight_low_slot_and_scan() {
        let mut v = vec![4, 2, 7, 1, 9, 3];
        let mut s = QuickSort::new(v.len());
        let first: Vec<Highlight> = (0..5).filter_map(|_| s.step(&mut v)).collect();
        assert_eq!(
            first,
            vec![
                // 4 > 3, low side still empty
                Highlight { a: None, b: Some(0) },
                Highlight::pair(0, 1),
                Highlight::pair(0, 2),
                Highlight::pair(1, 3),
                Highlight::pair(1, 4),
            ]
        );
        let mut rest = Vec::new();
        while let Some(h) = s.step(&mut v) {
            rest.push(h);
        }
        assert_eq!(v, vec![1, 2, 3, 4, 7, 9]);
        assert!(rest.contains(&Highlight::NONE));
    }

    #[test]
    fn ties_go_to_the_low_side() {
        let mut v = vec![3, 3, 3];
        let p = partition(&mut v, 0, 2);
        assert_eq!(p, 2);
    }

    #[test]
    fn settled_frame_after_each_partitioned_range() {
        // [2, 1]: one partition with one comparison, then the settled frame
        let mut v = vec![2, 1];
        let frames = trace(Algorithm::Quick, &mut v);
        assert_eq!(v, vec![1, 2]);
        assert_eq!(
            frames,
            vec![Highlight { a: None, b: Some(0) }, Highlight::NONE]
        );
    }

    proptest! {
        #[test]
        fn partition_splits_around_pivot(
            values in proptest::collection::vec(0u32..100, 1..40),
            lo_seed in 0usize..40,
        ) {
            let mut v = values.clone();
            let hi = v.len() - 1;
            let lo = lo_seed % v.len();
            let p = partition(&mut v, lo, hi);
            prop_assert!(lo <= p && p <= hi);
            let pivot = v[p];
            prop_assert!(v[lo..p].iter().all(|&x| x <= pivot));
            prop_assert!(v[p + 1..=hi].iter().all(|&x| x >= pivot));
            // outside the range nothing moves
            prop_assert_eq!(&v[..lo], &values[..lo]);
        }
    }
}
