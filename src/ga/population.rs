//! The evolving population of layouts.
//!
//! [`Population`] owns a fixed number of layouts and replaces all of them at
//! every generation: the two fittest layouts against the current target
//! snapshot are crossed `population_size` times and each child may mutate.
//! There is no elitism beyond re-deriving every child from the top two.

use super::config::EvolutionConfig;
use super::fitness::FitnessEvaluator;
use super::operators::{crossover, mutate};
use super::selection::{rank, score_all, top_two};
use super::types::{FitnessScore, Layout};
use crate::error::ConfigError;
use crate::sim::{CellRegion, Target};
use rand::Rng;
use tracing::instrument;

/// Outcome of one call to [`Population::advance_generation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Generations produced so far, including this one.
    pub generation: u64,

    /// Scores of the two parents, best first.
    pub parent_scores: [FitnessScore; 2],

    /// Children that received a mutation.
    pub mutations: usize,
}

/// A fixed-size collection of candidate layouts.
///
/// Created empty by [`Population::new`]; [`initialize`](Population::initialize)
/// fills it. The size never changes after that.
#[derive(Debug, Clone)]
pub struct Population {
    config: EvolutionConfig,
    region: CellRegion,
    evaluator: FitnessEvaluator,
    layouts: Vec<Layout>,
    generation: u64,
}

impl Population {
    /// Creates an empty population after validating `config` and `region`.
    ///
    /// Placements are drawn from `region`; `evaluator` scores layouts during
    /// selection.
    pub fn new(
        config: EvolutionConfig,
        region: CellRegion,
        evaluator: FitnessEvaluator,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        region.validate()?;
        Ok(Self {
            layouts: Vec::with_capacity(config.population_size),
            config,
            region,
            evaluator,
            generation: 0,
        })
    }

    /// Draws `population_size` random layouts, discarding any previous ones.
    ///
    /// Each layout length is uniform in `[min_layout_len, max_layout_len]`
    /// and each placement is a uniform cell centre of the region.
    pub fn initialize<R: Rng>(&mut self, rng: &mut R) {
        let (min, max) = (self.config.min_layout_len, self.config.max_layout_len);
        let region = self.region;
        self.layouts = (0..self.config.population_size)
            .map(|_| {
                let len = rng.random_range(min..=max);
                (0..len)
                    .map(|_| region.random_placement(rng))
                    .collect::<Layout>()
            })
            .collect();
        self.generation = 0;
    }

    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn mutation_rate(&self) -> f64 {
        self.config.mutation_rate
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Generations produced since the last initialization.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Scores every layout against `targets`, in population order.
    pub fn scores(&self, targets: &[Target]) -> Vec<FitnessScore> {
        score_all(&self.evaluator, &self.layouts, targets, self.config.parallel)
    }

    /// Returns the two fittest layouts against `targets`, best first.
    ///
    /// Ties keep population order.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn select_parents(&self, targets: &[Target]) -> (&Layout, &Layout) {
        let [(first, _), (second, _)] = self.ranked_parents(targets);
        (&self.layouts[first], &self.layouts[second])
    }

    /// Returns the fittest layout against `targets` (first on ties).
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best_layout(&self, targets: &[Target]) -> &Layout {
        let [(best, _), _] = self.ranked_parents(targets);
        &self.layouts[best]
    }

    /// Replaces the whole population with children of the two fittest layouts.
    ///
    /// `targets` must be the snapshot taken before this tick's attacks.
    ///
    /// # Panics
    /// Panics if the population is empty.
    #[instrument(level = "debug", skip_all, fields(generation = self.generation + 1, targets = targets.len()))]
    pub fn advance_generation<R: Rng>(&mut self, targets: &[Target], rng: &mut R) -> GenerationSummary {
        let [(first, first_score), (second, second_score)] = self.ranked_parents(targets);
        let parent1 = self.layouts[first].clone();
        let parent2 = self.layouts[second].clone();

        let mut mutations = 0;
        let rate = self.config.mutation_rate;
        let region = self.region;
        let next: Vec<Layout> = (0..self.config.population_size)
            .map(|_| {
                let mut child = crossover(&parent1, &parent2);
                if mutate(&mut child, rate, &region, rng) {
                    mutations += 1;
                }
                child
            })
            .collect();

        self.layouts = next;
        self.generation += 1;

        tracing::debug!(
            best = first_score.value(),
            second = second_score.value(),
            mutations,
            "generation advanced"
        );

        GenerationSummary {
            generation: self.generation,
            parent_scores: [first_score, second_score],
            mutations,
        }
    }

    fn ranked_parents(&self, targets: &[Target]) -> [(usize, FitnessScore); 2] {
        assert!(!self.layouts.is_empty(), "cannot select from empty population");
        top_two(&rank(&self.scores(targets)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Placement;
    use crate::random::create_rng;
    use crate::sim::{Facing, Field, Side, TargetSpec};

    fn region() -> CellRegion {
        Field::default().region(Side::B)
    }

    fn population(config: EvolutionConfig) -> Population {
        Population::new(config, region(), FitnessEvaluator::new(30.0)).unwrap()
    }

    fn target_at(x: f64, y: f64) -> Target {
        Target::new((x, y), &TargetSpec::default(), Facing::Up)
    }

    /// A layout of `n` placements all sitting on (605, 5).
    fn stacked(n: usize) -> Layout {
        (0..n).map(|_| Placement::new(605, 5)).collect()
    }

    /// A layout far away from (605, 5).
    fn remote(n: usize) -> Layout {
        (0..n).map(|_| Placement::new(1195, 595)).collect()
    }

    // ---- Initialization ----

    #[test]
    fn test_initialize_respects_bounds() {
        let mut pop = population(EvolutionConfig::default().with_population_size(50));
        let mut rng = create_rng(42);
        pop.initialize(&mut rng);

        assert_eq!(pop.len(), 50);
        for layout in pop.layouts() {
            assert!((5..=10).contains(&layout.len()), "len {}", layout.len());
            assert!(layout.iter().all(|p| region().contains(*p)));
        }
    }

    #[test]
    fn test_initialize_is_deterministic() {
        let mut a = population(EvolutionConfig::default().with_population_size(20));
        let mut b = population(EvolutionConfig::default().with_population_size(20));
        a.initialize(&mut create_rng(7));
        b.initialize(&mut create_rng(7));
        assert_eq!(a.layouts(), b.layouts());

        let mut c = population(EvolutionConfig::default().with_population_size(20));
        c.initialize(&mut create_rng(8));
        assert_ne!(a.layouts(), c.layouts());
    }

    #[test]
    fn test_reinitialize_discards_previous() {
        let mut pop = population(EvolutionConfig::default());
        let mut rng = create_rng(1);
        pop.initialize(&mut rng);
        let first = pop.layouts().to_vec();
        pop.advance_generation(&[], &mut rng);
        assert_eq!(pop.generation(), 1);

        pop.initialize(&mut rng);
        assert_eq!(pop.len(), 5);
        assert_eq!(pop.generation(), 0);
        assert_ne!(pop.layouts(), first.as_slice());
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = Population::new(
            EvolutionConfig::default().with_population_size(0),
            region(),
            FitnessEvaluator::new(30.0),
        );
        assert!(matches!(result, Err(ConfigError::EmptyPopulation)));
    }

    #[test]
    fn test_new_rejects_empty_region() {
        let empty = CellRegion {
            rows: 0,
            ..region()
        };
        let result = Population::new(
            EvolutionConfig::default(),
            empty,
            FitnessEvaluator::new(30.0),
        );
        assert!(matches!(result, Err(ConfigError::EmptyRegion { rows: 0, .. })));
    }

    // ---- Selection ----

    #[test]
    fn test_select_parents_descending() {
        let mut pop = population(EvolutionConfig::default().with_population_size(3));
        // scores 10, 30, 20 against one target on (605, 5)
        pop.layouts = vec![stacked(10), stacked(30), stacked(20)];
        let targets = vec![target_at(605.0, 5.0)];

        assert_eq!(pop.scores(&targets), vec![FitnessScore(10), FitnessScore(30), FitnessScore(20)]);
        let (p1, p2) = pop.select_parents(&targets);
        assert_eq!(p1.len(), 30);
        assert_eq!(p2.len(), 20);
    }

    #[test]
    fn test_select_parents_stable_on_ties() {
        let mut pop = population(EvolutionConfig::default().with_population_size(4));
        let a: Layout = vec![Placement::new(605, 5), Placement::new(1195, 595)].into();
        let b: Layout = vec![Placement::new(605, 5), Placement::new(1185, 595)].into();
        pop.layouts = vec![remote(2), a.clone(), b.clone(), stacked(1)];
        let targets = vec![target_at(605.0, 5.0)];

        let (p1, p2) = pop.select_parents(&targets);
        assert_eq!(p1, &a);
        assert_eq!(p2, &b);
    }

    #[test]
    fn test_select_parents_without_targets_picks_first_two() {
        let mut pop = population(EvolutionConfig::default().with_population_size(3));
        pop.layouts = vec![remote(5), stacked(6), remote(7)];
        let (p1, p2) = pop.select_parents(&[]);
        assert_eq!(p1.len(), 5);
        assert_eq!(p2.len(), 6);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_select_on_empty_population_panics() {
        let pop = population(EvolutionConfig::default());
        pop.select_parents(&[]);
    }

    #[test]
    fn test_best_layout() {
        let mut pop = population(EvolutionConfig::default().with_population_size(3));
        pop.layouts = vec![stacked(1), stacked(3), stacked(3)];
        let targets = vec![target_at(605.0, 5.0)];
        assert!(std::ptr::eq(pop.best_layout(&targets), &pop.layouts[1]));
    }

    // ---- Generations ----

    #[test]
    fn test_size_constant_across_generations() {
        let mut pop = population(EvolutionConfig::default().with_population_size(12));
        let mut rng = create_rng(42);
        pop.initialize(&mut rng);
        let targets: Vec<Target> = (0..5)
            .map(|i| target_at(700.0 + 40.0 * i as f64, 300.0))
            .collect();

        for gen in 1..=50 {
            let summary = pop.advance_generation(&targets, &mut rng);
            assert_eq!(pop.len(), 12);
            assert_eq!(summary.generation, gen);
            assert!(summary.parent_scores[0] >= summary.parent_scores[1]);
        }
    }

    #[test]
    fn test_children_derive_from_top_two() {
        let mut pop = population(
            EvolutionConfig::default()
                .with_population_size(4)
                .with_mutation_rate(0.0),
        );
        let best: Layout = (0..8).map(|_| Placement::new(615, 5)).collect();
        let second = stacked(6);
        pop.layouts = vec![remote(5), second.clone(), best.clone(), remote(9)];
        let targets = vec![target_at(605.0, 5.0)];

        let summary = pop.advance_generation(&targets, &mut create_rng(1));

        assert_eq!(summary.mutations, 0);
        assert_eq!(summary.parent_scores, [FitnessScore(8), FitnessScore(6)]);
        let expected = crossover(&best, &second);
        assert!(pop.layouts().iter().all(|l| *l == expected));
    }

    #[test]
    fn test_mutation_counts_reported() {
        let mut pop = population(
            EvolutionConfig::default()
                .with_population_size(10)
                .with_mutation_rate(1.0),
        );
        let mut rng = create_rng(5);
        pop.initialize(&mut rng);
        let summary = pop.advance_generation(&[], &mut rng);
        assert_eq!(summary.mutations, 10);
    }

    #[test]
    fn test_single_layout_population_evolves() {
        let mut pop = population(
            EvolutionConfig::default()
                .with_population_size(1)
                .with_mutation_rate(0.0),
        );
        let mut rng = create_rng(9);
        pop.initialize(&mut rng);
        let only = pop.layouts()[0].clone();
        pop.advance_generation(&[], &mut rng);
        assert_eq!(pop.layouts(), &[only]);
    }
}
