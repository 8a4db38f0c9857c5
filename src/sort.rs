//! Sorting engine.
//!
//! Every algorithm is a resumable step machine: each call to [`Sorter::step`]
//! runs the algorithm up to its next render point, mutating the slice in place,
//! and returns the indices to highlight in that frame. `None` means the sort is
//! finished. Nothing here knows about drawing, so the UI can poll one step per
//! tick and stay responsive to input between steps.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::{MergeSort, merge};
pub use quick::{QuickSort, partition};

/// Up to two indices drawn in the accent color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Highlight {
    pub a: Option<usize>,
    pub b: Option<usize>,
}

impl Highlight {
    pub const NONE: Highlight = Highlight { a: None, b: None };

    pub fn one(a: usize) -> Self {
        Highlight {
            a: Some(a),
            b: None,
        }
    }

    pub fn pair(a: usize, b: usize) -> Self {
        Highlight {
            a: Some(a),
            b: Some(b),
        }
    }

    pub fn contains(&self, i: usize) -> bool {
        self.a == Some(i) || self.b == Some(i)
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_none() && self.b.is_none()
    }
}

pub trait Sorter: Send {
    /// Advance to the next frame. Returns `None` once the slice is sorted.
    fn step(&mut self, values: &mut [u32]) -> Option<Highlight>;

    /// Abandon the run, writing back anything held outside the slice so it
    /// keeps the same multiset of values it started with.
    fn cancel(&mut self, _values: &mut [u32]) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn from_key(ch: char) -> Option<Algorithm> {
        match ch.to_ascii_lowercase() {
            'b' => Some(Algorithm::Bubble),
            'i' => Some(Algorithm::Insertion),
            'm' => Some(Algorithm::Merge),
            'q' => Some(Algorithm::Quick),
            _ => None,
        }
    }

    pub fn key(self) -> char {
        match self {
            Algorithm::Bubble => 'b',
            Algorithm::Insertion => 'i',
            Algorithm::Merge => 'm',
            Algorithm::Quick => 'q',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// A fresh sorter for a slice of `len` values.
    pub fn sorter(self, len: usize) -> Box<dyn Sorter> {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort::new()),
            Algorithm::Insertion => Box::new(InsertionSort::new()),
            Algorithm::Merge => Box::new(MergeSort::new(len)),
            Algorithm::Quick => Box::new(QuickSort::new(len)),
        }
    }
}

/// Run `algorithm` over `values` to completion, collecting every frame's highlight.
pub fn trace(algorithm: Algorithm, values: &mut [u32]) -> Vec<Highlight> {
    let mut sorter = algorithm.sorter(values.len());
    let mut frames = Vec::new();
    while let Some(h) = sorter.step(values) {
        frames.push(h);
    }
    frames
}
