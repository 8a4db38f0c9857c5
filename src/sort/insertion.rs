use super::{Highlight, Sorter};

#[derive(Clone, Debug, Default)]
pub struct InsertionSort {
    next: usize,
    hole: usize,
    // value lifted out of the slice while larger elements shift right
    held: Option<u32>,
}

impl InsertionSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sorter for InsertionSort {
    fn step(&mut self, values: &mut [u32]) -> Option<Highlight> {
        let held = match self.held {
            Some(v) => v,
            None => {
                if self.next >= values.len() {
                    return None;
                }
                self.hole = self.next;
                self.next += 1;
                let v = values[self.hole];
                self.held = Some(v);
                v
            }
        };
        if self.hole > 0 && held < values[self.hole - 1] {
            values[self.hole] = values[self.hole - 1];
            self.hole -= 1;
            return Some(Highlight::one(self.hole));
        }
        values[self.hole] = held;
        self.held = None;
        Some(Highlight::NONE)
    }

    fn cancel(&mut self, values: &mut [u32]) {
        if let Some(v) = self.held.take() {
            values[self.hole] = v;
        }
        self.next = values.len();
    }
}
