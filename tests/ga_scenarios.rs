//! End-to-end GA behavior.

use evosearch::ga::line_fit::LineFit;
use evosearch::ga::{GaConfig, GaRunner, Gene, Individual, Population};
use evosearch::random::create_rng;
use evosearch::BreedingConfig;
use rand::RngCore;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn negative_sum(c: &[Gene]) -> f64 {
    -(c.iter().sum::<Gene>() as f64)
}

/// A source that only ever yields zero bits: every `chance(0.5)` fires and
/// every index draw is 0.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

#[test]
fn test_random_population_is_sorted() {
    init_logger();
    let mut rng = create_rng(42);
    let pop = Population::from_random(4, 2, 10, &negative_sum, &mut rng).unwrap();

    assert_eq!(pop.len(), 4);
    let fitness: Vec<f64> = pop.iter().map(Individual::fitness).collect();
    assert!(fitness.windows(2).all(|w| w[0] <= w[1]), "{fitness:?}");
    assert_eq!(pop.best_fitness(), fitness[0]);
    for ind in &pop {
        assert_eq!(ind.len(), 2);
        assert!(ind.iter().all(|g| (0..=10).contains(&g)));
    }
}

#[test]
fn test_crossover_under_first_parent_source() {
    let a = Individual::from_chromosome(vec![1, 1, 1, 1], 10, &negative_sum).unwrap();
    let b = Individual::from_chromosome(vec![9, 9, 9, 9], 10, &negative_sum).unwrap();
    let child = a.crossover(&b, &negative_sum, &mut ZeroRng).unwrap();
    assert_eq!(child.chromosome(), &[1, 1, 1, 1]);
    assert_eq!(child.fitness(), -4.0);
}

#[test]
fn test_full_preservation_never_loses_the_best() {
    init_logger();
    let mut rng = create_rng(42);
    let breeding = BreedingConfig::default()
        .with_preserve_percent(1.0)
        .with_non_optimal(0.0);
    let mut pop = Population::from_random(10, 5, 10, &negative_sum, &mut rng).unwrap();
    for _ in 0..20 {
        let next = pop.new_population(&breeding, &mut rng).unwrap();
        assert!(next.best_fitness() <= pop.best_fitness());
        pop = next;
    }
}

#[test]
fn test_elitism_keeps_best_with_partial_preservation() {
    let mut rng = create_rng(7);
    let breeding = BreedingConfig::default()
        .with_preserve_percent(0.2)
        .with_mutation_percent(0.3);
    let mut pop = Population::from_random(20, 6, 9, &negative_sum, &mut rng).unwrap();
    for _ in 0..30 {
        let next = pop.new_population(&breeding, &mut rng).unwrap();
        assert!(next.best_fitness() <= pop.best_fitness());
        assert!(next.contains(pop.fittest()));
        pop = next;
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = GaConfig::default()
        .with_population_size(16)
        .with_individual_length(4)
        .with_max_generations(25)
        .with_seed(2024);
    let spread = |c: &[Gene]| c.iter().map(|&g| (g - 3).abs() as f64).sum::<f64>();
    let a = GaRunner::run(&spread, &config).unwrap();
    let b = GaRunner::run(&spread, &config).unwrap();
    assert_eq!(a.fittest, b.fittest);
    assert_eq!(a.generations, b.generations);
    assert_eq!(a.fitness_history, b.fitness_history);
}

#[test]
fn test_line_fit_scores_exact_line() {
    let points: Vec<(f64, f64)> = (0..5).map(|x| (x as f64, 2.0 * x as f64 + 1.0)).collect();
    let fit = LineFit::new(points);
    assert_eq!(fit.distance_sum(&[2, 1]), 0.0);
    assert!(fit.distance_sum(&[3, 1]) > 0.0);

    let config = GaConfig::default()
        .with_population_size(30)
        .with_gene_max(5)
        .with_max_generations(40)
        .with_seed(42);
    let result = fit.evolve(&config).unwrap();
    assert_eq!(result.fitness, fit.distance_sum(&[result.slope, result.intercept]));
}
