//! End-to-end GP behavior.

use evosearch::gp::{
    default_fitness, to_infix, EvalError, Expr, Func, GpConfig, GpRunner, Individual, Node,
    Population, TargetFitness, TreeFitness, PENALTY_FITNESS,
};
use evosearch::random::create_rng;
use evosearch::BreedingConfig;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_default_fitness_values() {
    let sum = Node::new(Func::Add, Expr::terminal(2), Expr::terminal(3));
    assert_eq!(to_infix(&sum), "2 + 3");
    assert_eq!(default_fitness(&sum), 0.5);

    let div_zero = Node::new(Func::Div, Expr::terminal(4), Expr::terminal(0));
    assert_eq!(default_fitness(&div_zero), PENALTY_FITNESS);
    assert_eq!(
        TargetFitness::default().evaluate(&div_zero),
        Err(EvalError::DivisionByZero)
    );
}

#[test]
fn test_exact_target_scores_zero() {
    // 2 * 5 = 10
    let mut ind = Individual::from_tree(Node::new(Func::Mul, Expr::terminal(2), Expr::terminal(5)));
    assert_eq!(ind.eval(&TargetFitness::default()), 0.0);
}

#[test]
fn test_elites_survive_into_next_generation() {
    init_logger();
    let mut rng = create_rng(42);
    let fitness = TargetFitness::default();
    let breeding = BreedingConfig::default().with_preserve_percent(0.2);
    let mut pop = Population::from_random(20, 3, &mut rng).unwrap();
    let mut previous_best = f64::INFINITY;

    for _ in 0..15 {
        pop.eval(&fitness);
        let best = pop.fittest().unwrap().clone();
        let best_fitness = best.fitness().unwrap();
        assert!(best_fitness <= previous_best);
        previous_best = best_fitness;

        let next = pop.new_population(&breeding, 3, &mut rng).unwrap();
        assert_eq!(next.len(), 20);
        assert!(next.contains(&best));
        pop = next;
    }
}

#[test]
fn test_custom_fitness_closure() {
    // Prefer small trees.
    let size = |tree: &Node| -> Result<f64, EvalError> { Ok(tree.size() as f64) };
    let config = GpConfig::default()
        .with_population_size(20)
        .with_max_generations(50)
        .with_seed(42);
    let result = GpRunner::run(&size, &config).unwrap();
    assert!(result.best_fitness >= 3.0);
    assert_eq!(result.best_fitness, result.best.tree().size() as f64);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    init_logger();
    let config = GpConfig::default()
        .with_population_size(25)
        .with_max_generations(30)
        .with_seed(2024);
    let fitness = TargetFitness::new(24.0).unwrap();
    let a = GpRunner::run(&fitness, &config).unwrap();
    let b = GpRunner::run(&fitness, &config).unwrap();
    assert_eq!(a.best, b.best);
    assert_eq!(a.generations, b.generations);
    assert_eq!(a.fitness_history, b.fitness_history);
    assert_eq!(a.to_string(), b.to_string());
}
