//! GA individual: a fixed-length integer chromosome and its fitness.

use super::types::{Gene, GeneFitness};
use crate::breeding::compare_fitness;
use crate::error::{EvolveError, Result};
use crate::random::{chance, random_gene};
use rand::Rng;
use std::cmp::Ordering;

/// A candidate solution: a chromosome of genes in `[0, gene_max]`.
///
/// The cached fitness always matches the chromosome. Both constructors
/// evaluate it, and [`mutate`](Individual::mutate) re-evaluates it before
/// returning. Individuals inside a [`Population`](super::Population) are
/// only reachable through shared references, so parents cannot change
/// while a generation is being bred.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: Vec<Gene>,
    gene_max: Gene,
    fitness: f64,
}

impl Individual {
    /// Creates an individual with `length` uniform genes in `[0, gene_max]`.
    ///
    /// # Errors
    ///
    /// [`EvolveError::NegativeGeneMax`] if `gene_max < 0`.
    pub fn from_random<F, R>(length: usize, gene_max: Gene, fitness: &F, rng: &mut R) -> Result<Self>
    where
        F: GeneFitness + ?Sized,
        R: Rng,
    {
        check_gene_max(gene_max)?;
        let chromosome = (0..length).map(|_| random_gene(gene_max, rng)).collect();
        Self::from_chromosome(chromosome, gene_max, fitness)
    }

    /// Creates an individual from an existing chromosome, e.g. a crossover product.
    ///
    /// # Errors
    ///
    /// [`EvolveError::NegativeGeneMax`] if `gene_max < 0`.
    pub fn from_chromosome<F>(chromosome: Vec<Gene>, gene_max: Gene, fitness: &F) -> Result<Self>
    where
        F: GeneFitness + ?Sized,
    {
        check_gene_max(gene_max)?;
        let value = fitness.evaluate(&chromosome);
        Ok(Self {
            chromosome,
            gene_max,
            fitness: value,
        })
    }

    /// Returns the cached fitness.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Returns the inclusive gene bound.
    pub fn gene_max(&self) -> Gene {
        self.gene_max
    }

    /// Returns the chromosome.
    pub fn chromosome(&self) -> &[Gene] {
        &self.chromosome
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    /// Returns `true` for a zero-length chromosome.
    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }

    /// Gene at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Gene> {
        self.chromosome.get(index).copied()
    }

    /// Iterates over the genes in locus order.
    pub fn iter(&self) -> impl Iterator<Item = Gene> + '_ {
        self.chromosome.iter().copied()
    }

    /// Returns `true` if any locus holds `gene`.
    pub fn contains(&self, gene: Gene) -> bool {
        self.chromosome.contains(&gene)
    }

    /// Redraws each locus independently with probability `probability`.
    ///
    /// Fitness is re-evaluated before returning.
    pub fn mutate<F, R>(&mut self, probability: f64, fitness: &F, rng: &mut R)
    where
        F: GeneFitness + ?Sized,
        R: Rng,
    {
        for gene in self.chromosome.iter_mut() {
            if chance(probability, rng) {
                *gene = random_gene(self.gene_max, rng);
            }
        }
        self.fitness = fitness.evaluate(&self.chromosome);
    }

    /// Uniform per-locus crossover producing one child.
    ///
    /// Each locus takes this individual's allele with probability 0.5 and
    /// `other`'s allele otherwise. The child inherits this individual's
    /// gene bound.
    ///
    /// # Errors
    ///
    /// [`EvolveError::ChromosomeLengthMismatch`] if the parents differ in length.
    pub fn crossover<F, R>(&self, other: &Individual, fitness: &F, rng: &mut R) -> Result<Individual>
    where
        F: GeneFitness + ?Sized,
        R: Rng,
    {
        if self.len() != other.len() {
            return Err(EvolveError::ChromosomeLengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let chromosome = self
            .chromosome
            .iter()
            .zip(&other.chromosome)
            .map(|(&mine, &theirs)| if chance(0.5, rng) { mine } else { theirs })
            .collect();
        Individual::from_chromosome(chromosome, self.gene_max, fitness)
    }

    /// Orders individuals by fitness, ascending.
    pub fn compare(&self, other: &Individual) -> Ordering {
        compare_fitness(self.fitness, other.fitness)
    }
}

fn check_gene_max(gene_max: Gene) -> Result<()> {
    if gene_max < 0 {
        Err(EvolveError::NegativeGeneMax(gene_max))
    } else {
        Ok(())
    }
}
