use std::cmp::Ordering;

/// `f64` with a total order, for use as a heap or sort key.
#[derive(Debug, Clone, Copy)]
pub struct OrderedWeight(pub f64);

impl PartialEq for OrderedWeight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedWeight {}

impl PartialOrd for OrderedWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
