//! Layout crossover and mutation.
//!
//! # Crossover
//!
//! [`crossover`] splits at half of the first parent's length and appends the
//! second parent's tail from that same index. When the second parent is
//! shorter than the split point its tail is empty, so the child length is
//! `max(len(a) / 2, len(b))` rather than `len(a)`.
//!
//! # Mutation
//!
//! [`mutate`] re-draws at most one placement per call and never resizes.

use super::types::Layout;
use crate::sim::CellRegion;
use rand::Rng;

/// Half-split crossover: `a[..len(a)/2] ++ b[len(a)/2..]`.
///
/// # Examples
///
/// ```
/// use trap_evolve::ga::{operators::crossover, Layout, Placement};
///
/// let a: Layout = (0..6).map(|i| Placement::new(i, 0)).collect();
/// let b: Layout = (0..8).map(|i| Placement::new(i, 1)).collect();
/// let child = crossover(&a, &b);
///
/// assert_eq!(child.len(), 8);
/// assert_eq!(&child.placements()[..3], &a.placements()[..3]);
/// assert_eq!(&child.placements()[3..], &b.placements()[3..]);
/// ```
pub fn crossover(a: &Layout, b: &Layout) -> Layout {
    let split = a.len() / 2;
    let head = &a.placements()[..split];
    let tail = b.placements().get(split..).unwrap_or(&[]);
    head.iter().chain(tail).copied().collect()
}

/// With probability `rate`, replaces one uniformly chosen placement with a
/// fresh random cell from `region`.
///
/// Returns `true` if a placement was re-drawn. Empty layouts are left alone.
pub fn mutate<R: Rng>(layout: &mut Layout, rate: f64, region: &CellRegion, rng: &mut R) -> bool {
    if layout.is_empty() || !rng.random_bool(rate) {
        return false;
    }
    let idx = rng.random_range(0..layout.len());
    layout.replace(idx, region.random_placement(rng));
    true
}
