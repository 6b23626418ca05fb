use crate::params::{Param, ParameterDescriptor, ParameterSpace};
use rand::Rng;

/// One encoded parameter value. 16 bits keep the quantization step of every
/// catalog parameter below 0.001 of its range, well under tuning-relevant
/// precision.
pub type Gene = u16;

/// Bits per gene.
pub const FIELD_WIDTH: usize = Gene::BITS as usize;

/// Bits in a whole chromosome.
pub const TOTAL_BITS: usize = FIELD_WIDTH * Param::COUNT;

const FIELD_MAX: f64 = Gene::MAX as f64;

/// Fixed-width bit-string encoding of one full candidate parameter vector.
///
/// Each parameter occupies one 16-bit gene holding its value linearly mapped
/// between the parameter's `min` and `max`. Bit 0 of gene `i` sits at global
/// bit position `i * FIELD_WIDTH`, LSB first within a gene.
///
/// Genetic operators work on linear bit strings far more simply than on the
/// decoded values: crossover is mask arithmetic, mutation is a single XOR,
/// and any bit pattern decodes to an in-bounds parameter vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chromosome {
    genes: [Gene; Param::COUNT],
}

/// Linearly scale `value` into the gene range, rounding to nearest. Values
/// outside the descriptor's bounds clamp rather than wrap, so an overshoot
/// can never alias into a different region of the parameter's range.
pub fn encode(value: f64, descriptor: &ParameterDescriptor) -> Gene {
    let clamped = value.clamp(descriptor.min, descriptor.max);
    let fraction = (clamped - descriptor.min) / (descriptor.max - descriptor.min);
    (fraction * FIELD_MAX).round() as Gene
}

/// Inverse of [`encode`]; always lands in `[min, max]`.
pub fn decode(gene: Gene, descriptor: &ParameterDescriptor) -> f64 {
    descriptor.min + (gene as f64 / FIELD_MAX) * (descriptor.max - descriptor.min)
}

/// Invert exactly the bit at `pos`, leaving all others unchanged.
pub fn reverse_bit(gene: &mut Gene, pos: usize) {
    debug_assert!(pos < FIELD_WIDTH);
    *gene ^= (1 as Gene) << pos;
}

impl Chromosome {
    pub fn from_genes(genes: [Gene; Param::COUNT]) -> Self {
        Self { genes }
    }

    /// Chromosome encoding every parameter's `start` value.
    pub fn seed(space: &ParameterSpace) -> Self {
        let mut genes = [0; Param::COUNT];
        for d in space.descriptors() {
            genes[d.param.index()] = encode(d.start, d);
        }
        Self { genes }
    }

    /// Chromosome with each parameter drawn uniformly from its range.
    pub fn random<R: Rng>(space: &ParameterSpace, rng: &mut R) -> Self {
        let mut genes = [0; Param::COUNT];
        for d in space.descriptors() {
            genes[d.param.index()] = encode(rng.gen_range(d.min..=d.max), d);
        }
        Self { genes }
    }

    pub fn gene(&self, param: Param) -> Gene {
        self.genes[param.index()]
    }

    pub fn set_gene(&mut self, param: Param, gene: Gene) {
        self.genes[param.index()] = gene;
    }

    pub fn genes(&self) -> &[Gene; Param::COUNT] {
        &self.genes
    }

    /// Decoded value of one parameter.
    pub fn value(&self, param: Param, space: &ParameterSpace) -> f64 {
        decode(self.gene(param), space.descriptor(param))
    }

    /// Full decode, in `Param::ALL` order.
    pub fn values(&self, space: &ParameterSpace) -> [f64; Param::COUNT] {
        let mut out = [0.0; Param::COUNT];
        for d in space.descriptors() {
            out[d.param.index()] = decode(self.genes[d.param.index()], d);
        }
        out
    }

    /// Invert one bit of one parameter's gene.
    pub fn flip_bit(&mut self, param: Param, pos: usize) {
        reverse_bit(&mut self.genes[param.index()], pos);
    }

    /// Bit at a global position in the concatenated bit string.
    pub fn bit(&self, pos: usize) -> bool {
        debug_assert!(pos < TOTAL_BITS);
        (self.genes[pos / FIELD_WIDTH] >> (pos % FIELD_WIDTH)) & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> ParameterSpace {
        ParameterSpace::clustering().unwrap()
    }

    #[test]
    fn round_trip_is_within_one_quantization_step() {
        let space = space();
        for d in space.descriptors() {
            let step = (d.max - d.min) / FIELD_MAX;
            for i in 0..=10 {
                let v = d.min + (d.max - d.min) * (i as f64 / 10.0);
                let back = decode(encode(v, d), d);
                assert!(
                    (back - v).abs() <= step,
                    "{}: {} decoded to {}",
                    d.title,
                    v,
                    back
                );
            }
        }
    }

    #[test]
    fn kappa_start_survives_encoding() {
        let space = space();
        let d = space.descriptor(Param::Kappa);
        let back = decode(encode(9.0, d), d);
        assert!((back - 9.0).abs() <= 149.0 / 65535.0);
    }

    #[test]
    fn out_of_bounds_values_clamp() {
        let space = space();
        let d = space.descriptor(Param::Kappa);
        assert_eq!(encode(-20.0, d), 0);
        assert_eq!(encode(1e6, d), Gene::MAX);
        assert_eq!(decode(encode(1e6, d), d), d.max);
    }

    #[test]
    fn double_flip_restores_the_gene() {
        let space = space();
        let mut c = Chromosome::seed(&space);
        let original = c;
        c.flip_bit(Param::DeltaBH, 11);
        assert_ne!(c, original);
        c.flip_bit(Param::DeltaBH, 11);
        assert_eq!(c, original);
    }

    #[test]
    fn flip_touches_exactly_one_bit() {
        let space = space();
        let mut c = Chromosome::seed(&space);
        let original = c;
        c.flip_bit(Param::Kernel, 3);
        let differing = (0..TOTAL_BITS)
            .filter(|&p| c.bit(p) != original.bit(p))
            .count();
        assert_eq!(differing, 1);
    }

    #[test]
    fn random_chromosome_decodes_in_bounds() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        let space = space();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let c = Chromosome::random(&space, &mut rng);
            for d in space.descriptors() {
                let v = c.value(d.param, &space);
                assert!(v >= d.min && v <= d.max);
            }
        }
    }
}
