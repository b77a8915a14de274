//! Fitness ranking and parent selection.
//!
//! Selection is deterministic truncation: every layout is scored against
//! the current snapshot, the ranking is sorted by score descending with
//! ties kept in population order, and the top two become parents.

use super::fitness::FitnessEvaluator;
use super::types::{FitnessScore, Layout};
use crate::sim::Target;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores every layout, in population order.
pub fn score_all(
    evaluator: &FitnessEvaluator,
    layouts: &[Layout],
    targets: &[Target],
    parallel: bool,
) -> Vec<FitnessScore> {
    if parallel {
        return score_parallel(evaluator, layouts, targets);
    }
    layouts
        .iter()
        .map(|layout| evaluator.evaluate(layout, targets))
        .collect()
}

#[cfg(feature = "parallel")]
fn score_parallel(
    evaluator: &FitnessEvaluator,
    layouts: &[Layout],
    targets: &[Target],
) -> Vec<FitnessScore> {
    layouts
        .par_iter()
        .map(|layout| evaluator.evaluate(layout, targets))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_parallel(
    evaluator: &FitnessEvaluator,
    layouts: &[Layout],
    targets: &[Target],
) -> Vec<FitnessScore> {
    score_all(evaluator, layouts, targets, false)
}

/// Ranks layouts by score, best first.
///
/// Returns `(index, score)` pairs. The sort is stable, so equal scores keep
/// their population order.
pub fn rank(scores: &[FitnessScore]) -> Vec<(usize, FitnessScore)> {
    let mut ranked: Vec<(usize, FitnessScore)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Picks the two best-ranked indices.
///
/// A single-layout population yields that layout as both parents.
///
/// # Panics
/// Panics if `ranked` is empty.
pub fn top_two(ranked: &[(usize, FitnessScore)]) -> [(usize, FitnessScore); 2] {
    assert!(!ranked.is_empty(), "cannot select from empty population");
    let first = ranked[0];
    let second = ranked.get(1).copied().unwrap_or(first);
    [first, second]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: &[u32]) -> Vec<FitnessScore> {
        values.iter().map(|&v| FitnessScore(v)).collect()
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank(&scores(&[10, 30, 20]));
        let order: Vec<usize> = ranked.iter().map(|r| r.0).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_rank_stable_on_ties() {
        let ranked = rank(&scores(&[5, 7, 5, 7, 5]));
        let order: Vec<usize> = ranked.iter().map(|r| r.0).collect();
        assert_eq!(order, vec![1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_top_two() {
        let ranked = rank(&scores(&[10, 30, 20]));
        let [first, second] = top_two(&ranked);
        assert_eq!(first, (1, FitnessScore(30)));
        assert_eq!(second, (2, FitnessScore(20)));
    }

    #[test]
    fn test_top_two_single() {
        let ranked = rank(&scores(&[4]));
        let [first, second] = top_two(&ranked);
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        top_two(&[]);
    }

    #[test]
    fn test_score_all_keeps_order() {
        use crate::ga::Placement;
        use crate::sim::{Facing, TargetSpec};

        let eval = FitnessEvaluator::new(30.0);
        let near: Layout = vec![Placement::new(0, 0)].into();
        let far: Layout = vec![Placement::new(900, 900)].into();
        let targets = vec![Target::new((0.0, 0.0), &TargetSpec::default(), Facing::Up)];

        let s = score_all(&eval, &[far.clone(), near, far], &targets, true);
        assert_eq!(s, scores(&[0, 1, 0]));
    }
}
