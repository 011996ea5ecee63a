//! GA population: one sorted generation plus its fitness statistics.

use super::individual::Individual;
use super::types::{Gene, GeneFitness};
use crate::breeding::{parent_pool, pick_parent, BreedingConfig};
use crate::error::{EvolveError, Result};
use rand::Rng;
use std::fmt;

/// One generation of GA individuals.
///
/// Individuals are sorted ascending by fitness as soon as the population
/// is built, and the size is always exactly `n_individuals`. A population
/// is never modified after construction: advancing a generation builds a
/// new one with [`new_population`](Population::new_population), so the
/// previous generation's statistics stay valid for comparison.
pub struct Population<'f, F: GeneFitness + ?Sized> {
    individuals: Vec<Individual>,
    n_individuals: usize,
    best_fitness: f64,
    avg_fitness: f64,
    fitness_fn: &'f F,
}

impl<'f, F: GeneFitness + ?Sized> Population<'f, F> {
    /// Creates `n_individuals` random individuals.
    ///
    /// # Errors
    ///
    /// [`EvolveError::InvalidPopulationSize`] if `n_individuals == 0`,
    /// [`EvolveError::NegativeGeneMax`] if `gene_max < 0`.
    pub fn from_random<R: Rng>(
        n_individuals: usize,
        individual_length: usize,
        gene_max: Gene,
        fitness_fn: &'f F,
        rng: &mut R,
    ) -> Result<Self> {
        if n_individuals == 0 {
            return Err(EvolveError::InvalidPopulationSize(n_individuals));
        }
        let individuals = (0..n_individuals)
            .map(|_| Individual::from_random(individual_length, gene_max, fitness_fn, rng))
            .collect::<Result<Vec<_>>>()?;
        Self::from_individuals(n_individuals, individuals, fitness_fn)
    }

    /// Wraps an already-built generation, sorting it and caching statistics.
    ///
    /// # Errors
    ///
    /// [`EvolveError::InvalidPopulationSize`] if `n_individuals == 0`,
    /// [`EvolveError::PopulationSizeMismatch`] if the list has another length.
    pub fn from_individuals(
        n_individuals: usize,
        mut individuals: Vec<Individual>,
        fitness_fn: &'f F,
    ) -> Result<Self> {
        if n_individuals == 0 {
            return Err(EvolveError::InvalidPopulationSize(n_individuals));
        }
        if individuals.len() != n_individuals {
            return Err(EvolveError::PopulationSizeMismatch {
                expected: n_individuals,
                actual: individuals.len(),
            });
        }

        individuals.sort_by(Individual::compare);
        let best_fitness = individuals[0].fitness();
        let avg_fitness =
            individuals.iter().map(Individual::fitness).sum::<f64>() / n_individuals as f64;

        Ok(Self {
            individuals,
            n_individuals,
            best_fitness,
            avg_fitness,
            fitness_fn,
        })
    }

    /// Breeds the next generation.
    ///
    /// 1. The parent pool is the `floor(n * preserve_percent)` best
    ///    individuals plus `floor(n * non_optimal)` uniform draws from the
    ///    whole population.
    /// 2. The pool is copied unchanged into the next generation.
    /// 3. The rest is filled with children: two parents are drawn
    ///    uniformly from the pool, crossed over, and the child is mutated
    ///    at `mutation_percent` per locus.
    ///
    /// # Errors
    ///
    /// Fails fast when the rates give an empty or oversized parent pool.
    pub fn new_population<R: Rng>(
        &self,
        breeding: &BreedingConfig,
        rng: &mut R,
    ) -> Result<Population<'f, F>> {
        let parents = parent_pool(&self.individuals, breeding, rng)?;

        let mut next_gen = Vec::with_capacity(self.n_individuals);
        next_gen.extend(parents.iter().cloned());

        while next_gen.len() < self.n_individuals {
            let parent1 = pick_parent(&parents, rng);
            let parent2 = pick_parent(&parents, rng);
            let mut child = parent1.crossover(parent2, self.fitness_fn, rng)?;
            child.mutate(breeding.mutation_percent, self.fitness_fn, rng);
            next_gen.push(child);
        }

        Population::from_individuals(self.n_individuals, next_gen, self.fitness_fn)
    }

    /// The best individual.
    pub fn fittest(&self) -> &Individual {
        &self.individuals[0]
    }

    /// Fitness of the best individual.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Arithmetic mean fitness of the generation.
    pub fn avg_fitness(&self) -> f64 {
        self.avg_fitness
    }

    /// Requested and actual size of the generation.
    pub fn n_individuals(&self) -> usize {
        self.n_individuals
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false`: populations hold at least one individual.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Individual at rank `index` (0 = fittest).
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Iterates best-first.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// The sorted individuals as a slice.
    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    /// Returns `true` if a structurally equal individual is present.
    pub fn contains(&self, individual: &Individual) -> bool {
        self.individuals.contains(individual)
    }
}

impl<'a, 'f, F: GeneFitness + ?Sized> IntoIterator for &'a Population<'f, F> {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

impl<F: GeneFitness + ?Sized> fmt::Debug for Population<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Population")
            .field("n_individuals", &self.n_individuals)
            .field("best_fitness", &self.best_fitness)
            .field("avg_fitness", &self.avg_fitness)
            .field("individuals", &self.individuals)
            .finish()
    }
}
