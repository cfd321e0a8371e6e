/// A finite bag of frequency candidates consumed without replacement.
///
/// Removal swaps the chosen slot with the last element and shrinks the pool,
/// so the order left behind depends on every earlier draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingPool {
    values: Vec<i32>,
}

impl SamplingPool {
    pub fn new(values: &[i32]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current contents in storage order.
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Remove the element at `index`, moving the last element into its slot.
    ///
    /// Returns `None` when `index` is out of range (including an empty pool).
    pub fn take(&mut self, index: usize) -> Option<i32> {
        if index >= self.values.len() {
            return None;
        }
        Some(self.values.swap_remove(index))
    }
}
