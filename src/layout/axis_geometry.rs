//! Per-axis memoized size and distance maps.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use tracing::{trace, warn};

/// Where an axis gets its sizes from.
///
/// Either one constant applied to every index, or a per-index function
/// queried lazily. Swapping the source on a live axis resets that axis's
/// memoized geometry (see [`AxisGeometry::set_source`]).
pub enum SizingSource {
    /// Every index has this size.
    Constant(f64),
    /// Size is asked per index, at most once per index until a reset.
    PerIndex(Box<dyn Fn(usize) -> f64>),
}

impl SizingSource {
    /// Size used when the caller configures nothing: 100 pixels.
    pub const DEFAULT_SIZE: f64 = 100.0;

    /// Query the source for one index.
    fn measure(&self, index: usize) -> f64 {
        match self {
            SizingSource::Constant(size) => *size,
            SizingSource::PerIndex(f) => f(index),
        }
    }
}

impl Default for SizingSource {
    fn default() -> Self {
        SizingSource::Constant(Self::DEFAULT_SIZE)
    }
}

impl fmt::Debug for SizingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingSource::Constant(size) => f.debug_tuple("Constant").field(size).finish(),
            SizingSource::PerIndex(_) => f.write_str("PerIndex(..)"),
        }
    }
}

/// Memoized geometry state. `distances` is a prefix-sum vec seeded with
/// the 0.0 leading edge of index 0; `sizes` stays sparse because callers
/// may probe a far index without touching the ones between.
#[derive(Debug)]
struct AxisCache {
    sizes: HashMap<usize, f64>,
    distances: Vec<f64>,
}

impl AxisCache {
    fn seed() -> Self {
        AxisCache {
            sizes: HashMap::new(),
            distances: vec![0.0],
        }
    }
}

/// Lazily measured geometry of one axis (rows or columns).
///
/// Accessors take `&self`: the memo maps live behind a [`RefCell`] so a
/// single instance can serve every pane read-only, matching the
/// single-threaded sharing rule of the engine. The sizing source itself
/// is stored outside the cell, so user callbacks run with no live borrow.
///
/// # Invariants
/// - `distance_for(0) == 0`
/// - `distance_for(i) == distance_for(i - 1) + size_for(i - 1)` for every
///   computed `i >= 1`
/// - computed values never change until [`reset`](Self::reset)
#[derive(Debug)]
pub struct AxisGeometry {
    source: SizingSource,
    cache: RefCell<AxisCache>,
}

impl AxisGeometry {
    /// Create an axis backed by the given sizing source.
    pub fn new(source: SizingSource) -> Self {
        AxisGeometry {
            source,
            cache: RefCell::new(AxisCache::seed()),
        }
    }

    /// Memoized size of one index.
    ///
    /// On a miss the sizing source is consulted exactly once for this
    /// index and the result stored. Safe for indices beyond the measured
    /// high-water mark; probing does not fill the gap (distances do).
    pub fn size_for(&self, index: usize) -> f64 {
        if let Some(&size) = self.cache.borrow().sizes.get(&index) {
            return size;
        }
        let size = sanitize_size(self.source.measure(index), index);
        self.cache.borrow_mut().sizes.insert(index, size);
        size
    }

    /// Memoized cumulative offset of an index's leading edge.
    ///
    /// On a miss, walks forward from the high-water mark computing and
    /// caching size and distance for every intermediate index, so the
    /// adjacency invariant holds with no gaps. O(k) in the gap size;
    /// correct for arbitrary access order.
    pub fn distance_for(&self, index: usize) -> f64 {
        if let Some(&distance) = self.cache.borrow().distances.get(index) {
            return distance;
        }
        let start = self.cache.borrow().distances.len();
        trace!(from = start, to = index, "extending distance map");
        for i in start..=index {
            let step = self.size_for(i - 1);
            let mut cache = self.cache.borrow_mut();
            let previous = cache.distances[i - 1];
            cache.distances.push(previous + step);
        }
        self.cache.borrow().distances[index]
    }

    /// Largest index with a computed leading-edge distance.
    ///
    /// Starts at 0: index 0's leading edge is always known to be 0.
    pub fn measured_high_water_mark(&self) -> usize {
        self.cache.borrow().distances.len() - 1
    }

    /// Trailing edge of the last measured index, i.e. the pixel extent
    /// of everything measured so far.
    pub fn measured_extent(&self) -> f64 {
        let cache = self.cache.borrow();
        match cache.distances.last() {
            Some(&distance) => distance,
            None => 0.0,
        }
    }

    /// Total pixel extent of the first `count` indices.
    ///
    /// Forces measurement of all of them; `extent_through(0)` is 0.
    pub fn extent_through(&self, count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            self.distance_for(count)
        }
    }

    /// Drop every memoized size and distance.
    ///
    /// Exclusive access required: only the geometry owner may reset.
    pub fn reset(&mut self) {
        *self.cache.get_mut() = AxisCache::seed();
    }

    /// Replace the sizing source, resetting the axis.
    pub fn set_source(&mut self, source: SizingSource) {
        self.source = source;
        self.reset();
    }
}

impl Default for AxisGeometry {
    fn default() -> Self {
        AxisGeometry::new(SizingSource::default())
    }
}

/// Degrade invalid sizes to 0 instead of corrupting the distance map.
fn sanitize_size(raw: f64, index: usize) -> f64 {
    if raw.is_finite() && raw >= 0.0 {
        raw
    } else {
        warn!(index, raw, "invalid size degraded to 0");
        0.0
    }
}
