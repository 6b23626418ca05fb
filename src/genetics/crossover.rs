use crate::genetics::chromosome::{Chromosome, Gene, FIELD_WIDTH, TOTAL_BITS};
use crate::genetics::rng::rand_int;
use crate::params::Param;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recombination policy for a pair of parent chromosomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverPolicy {
    /// Every bit independently from either parent with equal probability.
    Uniform,
    /// One global cut anywhere in the concatenated bit string; a cut can
    /// land inside a gene.
    SinglePoint,
    /// One global cut constrained to a gene boundary, so no single
    /// parameter's encoding mixes bits from both parents.
    FixedSinglePoint,
    /// An independent cut inside every gene.
    MultiPoint,
}

impl fmt::Display for CrossoverPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CrossoverPolicy::Uniform => "Uniform",
            CrossoverPolicy::SinglePoint => "Single point",
            CrossoverPolicy::FixedSinglePoint => "Fixed single point",
            CrossoverPolicy::MultiPoint => "Multi point",
        };
        f.write_str(name)
    }
}

/// Recombine two parents into two offspring. Every offspring bit comes from
/// the corresponding bit of one of the parents; the two offspring make
/// complementary choices.
pub fn crossover<R: Rng>(
    a: &Chromosome,
    b: &Chromosome,
    policy: CrossoverPolicy,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    match policy {
        CrossoverPolicy::Uniform => uniform(a, b, rng),
        CrossoverPolicy::SinglePoint => splice(a, b, rand_int(rng, 0, TOTAL_BITS)),
        CrossoverPolicy::FixedSinglePoint => {
            splice(a, b, FIELD_WIDTH * rand_int(rng, 0, Param::COUNT))
        }
        CrossoverPolicy::MultiPoint => multi_point(a, b, rng),
    }
}

/// Mask covering bit positions `[0, cut)` of a gene.
fn low_mask(cut: usize) -> Gene {
    debug_assert!(cut <= FIELD_WIDTH);
    ((1u32 << cut) - 1) as Gene
}

fn mix(a: Gene, b: Gene, mask: Gene) -> (Gene, Gene) {
    ((a & mask) | (b & !mask), (b & mask) | (a & !mask))
}

fn uniform<R: Rng>(a: &Chromosome, b: &Chromosome, rng: &mut R) -> (Chromosome, Chromosome) {
    let mut c1 = *a;
    let mut c2 = *b;
    for param in Param::ALL {
        let mask: Gene = rng.gen();
        let (g1, g2) = mix(a.gene(param), b.gene(param), mask);
        c1.set_gene(param, g1);
        c2.set_gene(param, g2);
    }
    (c1, c2)
}

/// One global cut at bit `cut`: positions below the cut from parent A, the
/// rest from parent B (the second offspring takes the opposite halves).
/// Cuts of 0 or `TOTAL_BITS` degenerate to plain copies of the parents.
pub fn splice(a: &Chromosome, b: &Chromosome, cut: usize) -> (Chromosome, Chromosome) {
    debug_assert!(cut <= TOTAL_BITS);
    let mut c1 = *a;
    let mut c2 = *b;
    for param in Param::ALL {
        let lo = param.index() * FIELD_WIDTH;
        let mask = if cut >= lo + FIELD_WIDTH {
            low_mask(FIELD_WIDTH)
        } else if cut <= lo {
            0
        } else {
            low_mask(cut - lo)
        };
        let (g1, g2) = mix(a.gene(param), b.gene(param), mask);
        c1.set_gene(param, g1);
        c2.set_gene(param, g2);
    }
    (c1, c2)
}

fn multi_point<R: Rng>(a: &Chromosome, b: &Chromosome, rng: &mut R) -> (Chromosome, Chromosome) {
    let mut c1 = *a;
    let mut c2 = *b;
    for param in Param::ALL {
        let mask = low_mask(rand_int(rng, 0, FIELD_WIDTH));
        let (g1, g2) = mix(a.gene(param), b.gene(param), mask);
        c1.set_gene(param, g1);
        c2.set_gene(param, g2);
    }
    (c1, c2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterSpace;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parents() -> (Chromosome, Chromosome) {
        let a = Chromosome::from_genes([0x0000; Param::COUNT]);
        let b = Chromosome::from_genes([0xFFFF; Param::COUNT]);
        (a, b)
    }

    fn assert_bits_from_parents(child: &Chromosome, a: &Chromosome, b: &Chromosome) {
        for pos in 0..TOTAL_BITS {
            let bit = child.bit(pos);
            assert!(
                bit == a.bit(pos) || bit == b.bit(pos),
                "bit {} invented",
                pos
            );
        }
    }

    #[test]
    fn all_policies_preserve_bit_provenance() {
        let space = ParameterSpace::clustering().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let a = Chromosome::random(&space, &mut rng);
        let b = Chromosome::random(&space, &mut rng);
        for policy in [
            CrossoverPolicy::Uniform,
            CrossoverPolicy::SinglePoint,
            CrossoverPolicy::FixedSinglePoint,
            CrossoverPolicy::MultiPoint,
        ] {
            for _ in 0..50 {
                let (c1, c2) = crossover(&a, &b, policy, &mut rng);
                assert_bits_from_parents(&c1, &a, &b);
                assert_bits_from_parents(&c2, &a, &b);
            }
        }
    }

    #[test]
    fn splice_at_zero_copies_the_parents() {
        let (a, b) = parents();
        let (c1, c2) = splice(&a, &b, 0);
        assert_eq!(c1, b);
        assert_eq!(c2, a);
    }

    #[test]
    fn splice_at_full_length_copies_the_parents() {
        let (a, b) = parents();
        let (c1, c2) = splice(&a, &b, TOTAL_BITS);
        assert_eq!(c1, a);
        assert_eq!(c2, b);
    }

    #[test]
    fn splice_inside_a_gene_mixes_that_gene() {
        let (a, b) = parents();
        // Cut inside the kappa gene: 9 low bits from A, 7 high bits from B.
        let cut = Param::Kappa.index() * FIELD_WIDTH + 9;
        let (c1, _) = splice(&a, &b, cut);
        assert_eq!(c1.gene(Param::Kappa), 0xFE00);
        assert_eq!(c1.gene(Param::CriticalDistanceEE), 0x0000);
        assert_eq!(c1.gene(Param::Kernel), 0xFFFF);
    }

    #[test]
    fn fixed_single_point_never_splits_a_gene() {
        let (a, b) = parents();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..200 {
            let (c1, c2) = crossover(&a, &b, CrossoverPolicy::FixedSinglePoint, &mut rng);
            for param in Param::ALL {
                for child in [&c1, &c2] {
                    let g = child.gene(param);
                    assert!(g == 0x0000 || g == 0xFFFF, "gene {:?} split: {:#06x}", param, g);
                }
            }
        }
    }

    #[test]
    fn multi_point_cut_inside_a_gene_takes_bits_from_both_parents() {
        let (a, b) = parents();
        let mut rng = StdRng::seed_from_u64(1);
        let mut saw_mixed_gene = false;
        for _ in 0..100 {
            let (c1, _) = crossover(&a, &b, CrossoverPolicy::MultiPoint, &mut rng);
            for param in Param::ALL {
                let g = c1.gene(param);
                if g != 0x0000 && g != 0xFFFF {
                    // A strictly interior cut between all-zero and all-one
                    // parents must leave A's zeros below B's ones.
                    assert_eq!(g, Gene::MAX << g.trailing_zeros());
                    saw_mixed_gene = true;
                }
            }
        }
        assert!(saw_mixed_gene);
    }

    #[test]
    fn single_point_on_parents_differing_in_one_field_can_reproduce_a_parent() {
        let space = ParameterSpace::clustering().unwrap();
        let a = Chromosome::seed(&space);
        let mut b = a;
        b.set_gene(Param::Kappa, !a.gene(Param::Kappa));
        let (c1, c2) = splice(&a, &b, 0);
        assert_eq!(c1, b);
        assert_eq!(c2, a);
    }
}
