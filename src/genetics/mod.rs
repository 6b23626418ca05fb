pub mod chromosome;
pub mod crossover;
pub mod mutation;
pub mod rng;

pub use chromosome::{decode, encode, reverse_bit, Chromosome, Gene, FIELD_WIDTH, TOTAL_BITS};
pub use crossover::{crossover, CrossoverPolicy};
pub use mutation::mutate_bit;
