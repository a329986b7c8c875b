//! HeightIndex - O(log n) prefix sums and lower_bound via Fenwick tree
//!
//! Holds the vertical spans of a laid-out timeline (entry content, sub-entry
//! rows, margins) and answers "which span contains offset y" for hit testing.
//!
//! # Complexity
//!
//! - `push`: O(log n) amortized
//! - `prefix_sum`: O(log n)
//! - `lower_bound`: O(log² n)
//! - `total`: O(log n)
//! - `len`: O(1)

/// Fenwick tree over span heights in layout units.
#[derive(Debug, Clone)]
pub struct HeightIndex {
    /// Fenwick tree backing storage (1-indexed internally, 0-indexed API)
    tree: Vec<isize>,
    /// Number of valid spans (len <= tree.len())
    len: usize,
}

impl HeightIndex {
    /// Creates an empty index with pre-allocated storage.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tripline::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::new(16);
    /// assert_eq!(index.len(), 0);
    /// assert_eq!(index.total(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            tree: vec![0; capacity],
            len: 0,
        }
    }

    /// Builds an index from span heights in order.
    pub fn from_heights(heights: &[u32]) -> Self {
        let mut index = Self::new(heights.len());
        for &height in heights {
            index.push(height);
        }
        index
    }

    /// Returns the cumulative height up to and including `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tripline::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights(&[32, 20, 40]);
    /// assert_eq!(index.prefix_sum(0), 32);
    /// assert_eq!(index.prefix_sum(2), 92);
    /// ```
    pub fn prefix_sum(&self, index: usize) -> usize {
        assert!(
            index < self.len,
            "index {} out of bounds (len: {})",
            index,
            self.len
        );

        let sum = fenwick::array::prefix_sum(&self.tree, index);
        sum.max(0) as usize
    }

    /// Height of a single span.
    pub fn height_at(&self, index: usize) -> usize {
        if index == 0 {
            self.prefix_sum(0)
        } else {
            self.prefix_sum(index) - self.prefix_sum(index - 1)
        }
    }

    /// Offset of the top of span `index`.
    pub fn top_of(&self, index: usize) -> usize {
        if index == 0 {
            0
        } else {
            self.prefix_sum(index - 1)
        }
    }

    /// Binary search for the first index where `prefix_sum(index) > value`.
    ///
    /// Span i covers `[prefix_sum(i-1), prefix_sum(i))`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tripline::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::from_heights(&[10, 20, 15]);
    /// assert_eq!(index.lower_bound(0), Some(0));
    /// assert_eq!(index.lower_bound(10), Some(1));
    /// assert_eq!(index.lower_bound(30), Some(2));
    /// assert_eq!(index.lower_bound(45), None);
    /// ```
    pub fn lower_bound(&self, value: usize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let mut left = 0;
        let mut right = self.len;

        while left < right {
            let mid = left + (right - left) / 2;
            if self.prefix_sum(mid) > value {
                right = mid;
            } else {
                left = mid + 1;
            }
        }

        if left >= self.len {
            None
        } else {
            Some(left)
        }
    }

    /// Total height of all spans.
    pub fn total(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.prefix_sum(self.len - 1)
        }
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no span has been added.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a span.
    ///
    /// Growing the backing storage rebuilds the tree: zero-padding a Fenwick
    /// array in place would leave the new parent nodes without their sums.
    pub fn push(&mut self, height: u32) {
        if self.len >= self.tree.len() {
            let heights: Vec<usize> = (0..self.len).map(|i| self.height_at(i)).collect();
            self.tree = vec![0; self.tree.len().max(1) * 2];
            for (i, h) in heights.into_iter().enumerate() {
                fenwick::array::update(&mut self.tree, i, h as isize);
            }
        }

        let idx = self.len;
        self.len += 1;
        fenwick::array::update(&mut self.tree, idx, height as isize);
    }
}
