use crate::error::{Result, TuneError};

/// The tunable parameters of the clustering benchmark, in the fixed order
/// used throughout the tuner (gene order inside a chromosome, line order in
/// reports). EE/FH/BH are the three detector sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    CriticalDistanceEE,
    CriticalDistanceFH,
    CriticalDistanceBH,
    AssignmentDistanceEE,
    AssignmentDistanceFH,
    AssignmentDistanceBH,
    DeltaEE,
    DeltaFH,
    DeltaBH,
    Kappa,
    EnergyThreshold,
    MatchingDistance,
    Kernel,
}

impl Param {
    pub const COUNT: usize = 13;

    pub const ALL: [Param; Param::COUNT] = [
        Param::CriticalDistanceEE,
        Param::CriticalDistanceFH,
        Param::CriticalDistanceBH,
        Param::AssignmentDistanceEE,
        Param::AssignmentDistanceFH,
        Param::AssignmentDistanceBH,
        Param::DeltaEE,
        Param::DeltaFH,
        Param::DeltaBH,
        Param::Kappa,
        Param::EnergyThreshold,
        Param::MatchingDistance,
        Param::Kernel,
    ];

    /// Position of this parameter in `ALL`, and its gene index.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Bounds and seed value for one tunable parameter. `title` doubles as the
/// key under which the parameter appears in the benchmark's configuration
/// file.
#[derive(Debug, Clone, Copy)]
pub struct ParameterDescriptor {
    pub param: Param,
    pub title: &'static str,
    pub min: f64,
    pub max: f64,
    pub start: f64,
}

/// Immutable catalog of all parameter descriptors. Construction validates
/// every descriptor, so concurrent readers never observe a bad bound.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
    descriptors: [ParameterDescriptor; Param::COUNT],
}

/// Bounds established empirically against the clustering benchmark: values
/// outside them either kill the algorithm outright (e.g. kappa < 1.0) or
/// produce uniformly failing candidates (e.g. kappa > 150).
const CLUSTERING_CATALOG: [ParameterDescriptor; Param::COUNT] = [
    ParameterDescriptor { param: Param::CriticalDistanceEE, title: "critDistEE", min: 0.0, max: 20.0, start: 2.0 },
    ParameterDescriptor { param: Param::CriticalDistanceFH, title: "critDistFH", min: 2.0, max: 30.0, start: 2.0 },
    ParameterDescriptor { param: Param::CriticalDistanceBH, title: "critDistBH", min: 5.0, max: 50.0, start: 5.0 },
    ParameterDescriptor { param: Param::AssignmentDistanceEE, title: "assignDistEE", min: 0.0, max: 20.0, start: 2.0 },
    ParameterDescriptor { param: Param::AssignmentDistanceFH, title: "assignDistFH", min: 2.0, max: 30.0, start: 2.0 },
    ParameterDescriptor { param: Param::AssignmentDistanceBH, title: "assignDistBH", min: 5.0, max: 50.0, start: 5.0 },
    ParameterDescriptor { param: Param::DeltaEE, title: "deltaEE", min: 0.01, max: 30.0, start: 2.0 },
    ParameterDescriptor { param: Param::DeltaFH, title: "deltaFH", min: 0.01, max: 30.0, start: 2.0 },
    ParameterDescriptor { param: Param::DeltaBH, title: "deltaBH", min: 0.01, max: 40.0, start: 5.0 },
    ParameterDescriptor { param: Param::Kappa, title: "kappa", min: 1.0, max: 150.0, start: 9.0 },
    ParameterDescriptor { param: Param::EnergyThreshold, title: "eMin", min: 2.0, max: 10.0, start: 3.0 },
    ParameterDescriptor { param: Param::MatchingDistance, title: "matchingDist", min: 0.0, max: 30.0, start: 5.0 },
    // Continuous stand-in for a discrete kernel choice (0 - step, 1 - gaus,
    // 2 - exp); the benchmark rounds the decoded index itself.
    ParameterDescriptor { param: Param::Kernel, title: "kernel", min: -0.49, max: 2.49, start: 0.0 },
];

impl ParameterSpace {
    /// The standard catalog for the clustering benchmark.
    pub fn clustering() -> Result<Self> {
        Self::new(CLUSTERING_CATALOG)
    }

    pub fn new(descriptors: [ParameterDescriptor; Param::COUNT]) -> Result<Self> {
        for (i, d) in descriptors.iter().enumerate() {
            if d.param.index() != i {
                return Err(TuneError::Configuration(format!(
                    "Descriptor for {:?} is at position {}, expected {}",
                    d.param, i, d.param.index()
                )));
            }
            if !(d.min < d.max) {
                return Err(TuneError::Configuration(format!(
                    "Parameter '{}': min {} must be below max {}",
                    d.title, d.min, d.max
                )));
            }
            if d.start < d.min || d.start > d.max {
                return Err(TuneError::Configuration(format!(
                    "Parameter '{}': start {} outside [{}, {}]",
                    d.title, d.start, d.min, d.max
                )));
            }
        }
        Ok(Self { descriptors })
    }

    pub fn descriptor(&self, param: Param) -> &ParameterDescriptor {
        &self.descriptors[param.index()]
    }

    pub fn descriptors(&self) -> &[ParameterDescriptor; Param::COUNT] {
        &self.descriptors
    }
}
