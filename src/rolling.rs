//! Fixed window rolling average.

use crate::error::{Error, Result};

/// Mean of the last `capacity` pushed values, updated in O(1).
///
/// Until the window is full, the average is taken over the values
/// pushed so far only.
///
/// # Example
///
/// ```
/// use colorcet_catalog::RollingAverage;
/// let mut frame_ms = RollingAverage::new(3).unwrap();
/// frame_ms.extend([1., 2., 3., 4.]);
/// assert_eq!(frame_ms.average(), 3.);
/// assert_eq!(frame_ms.count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct RollingAverage {
    samples: Box<[f64]>, // Invariant: not empty
    next: usize, // slot of the next write (the oldest sample once full)
    count: usize, // ≤ samples.len()
    sum: f64, // sum of the `count` most recent samples
}

impl RollingAverage {
    /// Create an empty window holding up to `capacity` samples.
    /// A zero capacity is rejected.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 { return Err(Error::InvalidCapacity(capacity)) }
        Ok(RollingAverage { samples: vec![0.; capacity].into_boxed_slice(),
                            next: 0, count: 0, sum: 0. })
    }

    /// Add `value` to the window, evicting the oldest sample if the
    /// window is full.
    pub fn push(&mut self, value: f64) {
        if self.is_full() {
            self.sum -= self.samples[self.next];
        } else {
            self.count += 1;
        }
        self.samples[self.next] = value;
        self.sum += value;
        self.next = (self.next + 1) % self.samples.len();
    }

    /// Mean of the samples in the window, `0.` if there are none.
    pub fn average(&self) -> f64 {
        if self.count == 0 { 0. } else { self.sum / self.count as f64 }
    }

    /// Number of samples in the window.
    #[inline]
    pub fn count(&self) -> usize { self.count }

    #[inline]
    pub fn capacity(&self) -> usize { self.samples.len() }

    /// Whether the next push will evict a sample.
    #[inline]
    pub fn is_full(&self) -> bool { self.count == self.samples.len() }

    /// Forget all samples, keeping the capacity.
    pub fn clear(&mut self) {
        self.samples.fill(0.);
        self.next = 0;
        self.count = 0;
        self.sum = 0.;
    }
}

impl Extend<f64> for RollingAverage {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for v in iter { self.push(v) }
    }
}
