//! Genome types: placements, layouts and fitness scores.

use std::ops::Index;

/// One candidate trap location on a grid-cell centre.
///
/// Immutable once created; mutation replaces whole placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    x: i32,
    y: i32,
}

impl Placement {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

/// An ordered sequence of placements: one genome.
///
/// The length is fixed at creation. Only crossover produces a layout of a
/// different length; mutation swaps an element in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout(Vec<Placement>);

impl Layout {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.0.iter()
    }

    /// Overwrites the placement at `index`, keeping the length.
    pub(crate) fn replace(&mut self, index: usize, placement: Placement) {
        self.0[index] = placement;
    }
}

impl From<Vec<Placement>> for Layout {
    fn from(placements: Vec<Placement>) -> Self {
        Self(placements)
    }
}

impl FromIterator<Placement> for Layout {
    fn from_iter<T: IntoIterator<Item = Placement>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for Layout {
    type Output = Placement;

    fn index(&self, index: usize) -> &Placement {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Number of `(placement, target)` pairs within range. Higher is better.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessScore(pub u32);

impl FitnessScore {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for FitnessScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
