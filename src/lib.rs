//! Genetic-algorithm parameter auto-tuner for an external clustering
//! benchmark.
//!
//! The tuner searches a fixed 13-parameter continuous space. Candidates are
//! encoded as fixed-width bit strings ([`genetics::Chromosome`]), recombined
//! and perturbed by the operators in [`genetics`], and scored by writing the
//! decoded values into the benchmark's configuration file ([`bridge`]),
//! running the benchmark as a subprocess, and parsing its result file into a
//! [`evaluation::ClusteringMetrics`] record ([`evaluation::FitnessEvaluator`]).
//!
//! Population management (selection, replacement, the generation loop) is
//! intentionally left to the caller; this crate provides the primitives a
//! generation loop consumes.

pub mod bridge;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod genetics;
pub mod params;

pub use config::TunerConfig;
pub use error::{Result, TuneError};
pub use evaluation::{ClusteringMetrics, FitnessEvaluator, SENTINEL};
pub use genetics::{crossover, mutate_bit, Chromosome, CrossoverPolicy};
pub use params::{Param, ParameterDescriptor, ParameterSpace};
