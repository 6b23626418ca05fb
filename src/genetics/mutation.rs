use crate::genetics::chromosome::Chromosome;
use crate::params::Param;

/// Flip exactly the designated bit of one parameter's gene. Choosing which
/// bits to flip, and with what probability, is the caller's policy.
pub fn mutate_bit(chromosome: &mut Chromosome, param: Param, bit: usize) {
    chromosome.flip_bit(param, bit);
}
