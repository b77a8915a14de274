//! Fitness scoring of layouts against a target snapshot.

use super::types::{FitnessScore, Layout};
use crate::sim::Target;

/// Counts `(placement, target)` pairs within a fixed radius.
///
/// Every pair is checked: a placement may score against several targets,
/// and a target may be counted by several placements. The evaluator is a
/// pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessEvaluator {
    radius: f64,
}

impl FitnessEvaluator {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Scores `layout` against `targets`. Empty `targets` score 0.
    pub fn evaluate(&self, layout: &Layout, targets: &[Target]) -> FitnessScore {
        let mut hits = 0u32;
        for placement in layout {
            let (x, y) = (placement.x() as f64, placement.y() as f64);
            for target in targets {
                if target.distance_to(x, y) <= self.radius {
                    hits += 1;
                }
            }
        }
        FitnessScore(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Placement;
    use crate::sim::{Facing, TargetSpec};

    fn target_at(x: f64, y: f64) -> Target {
        Target::new((x, y), &TargetSpec::default(), Facing::Down)
    }

    fn layout(points: &[(i32, i32)]) -> Layout {
        points.iter().map(|&(x, y)| Placement::new(x, y)).collect()
    }

    #[test]
    fn test_empty_targets_score_zero() {
        let eval = FitnessEvaluator::new(30.0);
        let l = layout(&[(5, 5), (15, 15)]);
        assert_eq!(eval.evaluate(&l, &[]), FitnessScore(0));
    }

    #[test]
    fn test_counts_every_pair() {
        let eval = FitnessEvaluator::new(30.0);
        let l = layout(&[(0, 0), (10, 0)]);
        let targets = vec![target_at(0.0, 0.0), target_at(5.0, 0.0), target_at(500.0, 0.0)];
        // both placements reach both nearby targets
        assert_eq!(eval.evaluate(&l, &targets), FitnessScore(4));
    }

    #[test]
    fn test_adding_target_in_range_adds_one() {
        let eval = FitnessEvaluator::new(30.0);
        let l = layout(&[(100, 100), (400, 400)]);
        let mut targets = vec![target_at(110.0, 100.0)];
        let before = eval.evaluate(&l, &targets);

        targets.push(target_at(420.0, 400.0));
        let after = eval.evaluate(&l, &targets);

        assert_eq!(after.value(), before.value() + 1);
    }

    #[test]
    fn test_adding_target_out_of_range_changes_nothing() {
        let eval = FitnessEvaluator::new(30.0);
        let l = layout(&[(100, 100), (400, 400)]);
        let mut targets = vec![target_at(110.0, 100.0)];
        let before = eval.evaluate(&l, &targets);

        targets.push(target_at(250.0, 250.0));
        assert_eq!(eval.evaluate(&l, &targets), before);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let eval = FitnessEvaluator::new(30.0);
        let l = layout(&[(0, 0)]);
        assert_eq!(eval.evaluate(&l, &[target_at(18.0, 24.0)]), FitnessScore(1));
        assert_eq!(eval.evaluate(&l, &[target_at(18.0, 24.1)]), FitnessScore(0));
    }

    #[test]
    fn test_dead_targets_still_counted() {
        // the owning collection removes the dead; the evaluator scores what it is given
        let eval = FitnessEvaluator::new(30.0);
        let mut t = target_at(0.0, 0.0);
        t.take_damage(500.0);
        assert_eq!(eval.evaluate(&layout(&[(0, 0)]), &[t]), FitnessScore(1));
    }
}
