//! GP population: one generation of expression trees.

use super::eval::TreeFitness;
use super::individual::Individual;
use crate::breeding::{parent_pool, pick_parent, BreedingConfig};
use crate::error::{EvolveError, Result};
use rand::Rng;

/// One generation of GP individuals.
///
/// Unlike the GA population, fitness depends on an evaluator applied per
/// generation, so a new population starts unevaluated and unsorted.
/// [`eval`](Population::eval) scores every individual, sorts best-first
/// and returns the mean fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
    n_individuals: usize,
    evaluated: bool,
}

impl Population {
    /// Creates `n_individuals` random trees.
    ///
    /// # Errors
    ///
    /// [`EvolveError::InvalidPopulationSize`] if `n_individuals == 0`.
    pub fn from_random<R: Rng>(n_individuals: usize, max_depth: usize, rng: &mut R) -> Result<Self> {
        if n_individuals == 0 {
            return Err(EvolveError::InvalidPopulationSize(n_individuals));
        }
        let individuals = (0..n_individuals)
            .map(|_| Individual::from_random(max_depth, rng))
            .collect();
        Self::from_individuals(n_individuals, individuals)
    }

    /// Wraps a generation. Inherited fitness values are cleared.
    ///
    /// # Errors
    ///
    /// [`EvolveError::InvalidPopulationSize`] if `n_individuals == 0`,
    /// [`EvolveError::PopulationSizeMismatch`] if the list has another length.
    pub fn from_individuals(n_individuals: usize, mut individuals: Vec<Individual>) -> Result<Self> {
        if n_individuals == 0 {
            return Err(EvolveError::InvalidPopulationSize(n_individuals));
        }
        if individuals.len() != n_individuals {
            return Err(EvolveError::PopulationSizeMismatch {
                expected: n_individuals,
                actual: individuals.len(),
            });
        }
        for ind in &mut individuals {
            ind.clear_fitness();
        }
        Ok(Self {
            individuals,
            n_individuals,
            evaluated: false,
        })
    }

    /// Scores every individual, sorts ascending and returns the mean fitness.
    pub fn eval<F: TreeFitness + ?Sized>(&mut self, fitness: &F) -> f64 {
        let total: f64 = self.individuals.iter_mut().map(|ind| ind.eval(fitness)).sum();
        self.individuals.sort_by(Individual::compare);
        self.evaluated = true;
        total / self.n_individuals as f64
    }

    /// Breeds the next generation.
    ///
    /// Same elitism and random-extras pool as the GA. Each crossover yields
    /// two children; one is kept at random and run through
    /// `mutate_funcs`, `mutate_terms`, `prune` and `insert(insert_depth)`,
    /// in that order, each at `mutation_percent`.
    ///
    /// # Errors
    ///
    /// [`EvolveError::Unevaluated`] if [`eval`](Population::eval) has not
    /// run, and the parent-pool errors of
    /// [`parent_pool`](crate::breeding::parent_pool).
    pub fn new_population<R: Rng>(
        &self,
        breeding: &BreedingConfig,
        insert_depth: usize,
        rng: &mut R,
    ) -> Result<Population> {
        if !self.evaluated {
            return Err(EvolveError::Unevaluated);
        }
        let parents = parent_pool(&self.individuals, breeding, rng)?;
        let p = breeding.mutation_percent;

        let mut next_gen = Vec::with_capacity(self.n_individuals);
        next_gen.extend(parents.iter().cloned());

        while next_gen.len() < self.n_individuals {
            let parent1 = pick_parent(&parents, rng);
            let parent2 = pick_parent(&parents, rng);
            let [first, second] = parent1.crossover(parent2, rng);
            let mut child = if rng.random_range(0..2) == 0 { first } else { second };
            child.mutate_funcs(p, rng);
            child.mutate_terms(p, rng);
            child.prune(p, rng);
            child.insert(p, insert_depth, rng);
            next_gen.push(child);
        }

        Population::from_individuals(self.n_individuals, next_gen)
    }

    /// Whether fitness is current for this generation.
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// The best individual.
    ///
    /// # Errors
    ///
    /// [`EvolveError::Unevaluated`] before [`eval`](Population::eval).
    pub fn fittest(&self) -> Result<&Individual> {
        if !self.evaluated {
            return Err(EvolveError::Unevaluated);
        }
        Ok(&self.individuals[0])
    }

    pub fn n_individuals(&self) -> usize {
        self.n_individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    /// Returns `true` if an individual with an equal tree is present.
    pub fn contains(&self, individual: &Individual) -> bool {
        self.individuals.iter().any(|ind| ind.tree() == individual.tree())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
