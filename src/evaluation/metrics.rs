use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Placeholder for a metric the benchmark never reported. Any fitness
/// reduction must treat a sentinel field as maximally unfavorable.
pub const SENTINEL: f64 = 99999.0;

/// Quality metrics of one external clustering run, parsed from the
/// benchmark's eleven-line result file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusteringMetrics {
    /// Mean of the resolution, (E_rec - E_sim)/E_sim.
    pub resolution_mean: f64,
    pub resolution_sigma: f64,
    /// Mean of the separation factor, distance/(sigma_1 + sigma_2).
    pub separation_mean: f64,
    pub separation_sigma: f64,
    /// Mean of the containment, Ei_matched/Ei_totalSim.
    pub containment_mean: f64,
    pub containment_sigma: f64,
    /// Mean of (N_simHits - N_recHits)/N_simHits.
    pub delta_n_clusters_mean: f64,
    pub delta_n_clusters_sigma: f64,
    /// Fraction of event-layers where reconstruction found no sim clusters.
    pub n_reco_failed: f64,
    /// Fraction of event-layers where rec and sim clusters could not be matched.
    pub n_cant_match_rec_sim: f64,
    /// Fraction of fake rec clusters matching no sim cluster.
    pub n_fake_rec: f64,
}

impl Default for ClusteringMetrics {
    fn default() -> Self {
        Self {
            resolution_mean: SENTINEL,
            resolution_sigma: SENTINEL,
            separation_mean: SENTINEL,
            separation_sigma: SENTINEL,
            containment_mean: SENTINEL,
            containment_sigma: SENTINEL,
            delta_n_clusters_mean: SENTINEL,
            delta_n_clusters_sigma: SENTINEL,
            n_reco_failed: SENTINEL,
            n_cant_match_rec_sim: SENTINEL,
            n_fake_rec: SENTINEL,
        }
    }
}

impl ClusteringMetrics {
    fn field_mut(&mut self, index: usize) -> Option<&mut f64> {
        let field = match index {
            0 => &mut self.resolution_mean,
            1 => &mut self.resolution_sigma,
            2 => &mut self.separation_mean,
            3 => &mut self.separation_sigma,
            4 => &mut self.containment_mean,
            5 => &mut self.containment_sigma,
            6 => &mut self.delta_n_clusters_mean,
            7 => &mut self.delta_n_clusters_sigma,
            8 => &mut self.n_reco_failed,
            9 => &mut self.n_cant_match_rec_sim,
            10 => &mut self.n_fake_rec,
            _ => return None,
        };
        Some(field)
    }

    /// Parse the benchmark's result file: one double per line, eleven lines
    /// in fixed order. Never fails; a missing file, missing trailing lines,
    /// or an unparsable line leave the affected fields at [`SENTINEL`], which
    /// downstream reductions read as a failed evaluation.
    pub fn from_file(path: &Path) -> Self {
        let mut metrics = Self::default();
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Result file {} unreadable: {}", path.display(), e);
                return metrics;
            }
        };
        for (i, line) in contents.lines().enumerate() {
            let Some(field) = metrics.field_mut(i) else { break };
            match line.trim().parse::<f64>() {
                Ok(v) => *field = v,
                Err(_) => {
                    log::warn!(
                        "Result file {} line {}: cannot parse '{}'",
                        path.display(),
                        i + 1,
                        line
                    );
                }
            }
        }
        metrics
    }

    /// True when every field was populated from the result file.
    pub fn is_complete(&self) -> bool {
        [
            self.resolution_mean,
            self.resolution_sigma,
            self.separation_mean,
            self.separation_sigma,
            self.containment_mean,
            self.containment_sigma,
            self.delta_n_clusters_mean,
            self.delta_n_clusters_sigma,
            self.n_reco_failed,
            self.n_cant_match_rec_sim,
            self.n_fake_rec,
        ]
        .iter()
        .all(|&v| v != SENTINEL)
    }
}

impl fmt::Display for ClusteringMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resolution: {} +/- {}", self.resolution_mean, self.resolution_sigma)?;
        writeln!(f, "Separation: {} +/- {}", self.separation_mean, self.separation_sigma)?;
        writeln!(f, "Containment: {} +/- {}", self.containment_mean, self.containment_sigma)?;
        writeln!(
            f,
            "Delta N clusters: {} +/- {}",
            self.delta_n_clusters_mean, self.delta_n_clusters_sigma
        )?;
        writeln!(f, "Reco failed: {}", self.n_reco_failed)?;
        writeln!(f, "Rec-sim unmatched: {}", self.n_cant_match_rec_sim)?;
        write!(f, "Fake rec: {}", self.n_fake_rec)
    }
}
