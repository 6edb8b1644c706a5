//! Detect-or-simulate orchestration for one image.

use crate::estimator;
use crate::types::{DetectionCandidate, FaceAnalysis};
use serde::{Deserialize, Serialize};

/// Analyses for one image, with where they came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Raw candidate count from the detector (1 for a simulated result).
    pub faces_detected: usize,
    pub analyses: Vec<FaceAnalysis>,
    /// True when the analyses were manufactured by [`estimator::simulate`].
    pub simulated: bool,
}

impl Detection {
    fn simulated(seed: u64) -> Self {
        Self {
            faces_detected: 1,
            analyses: vec![estimator::simulate(seed)],
            simulated: true,
        }
    }
}

/// Analyze a detector's output, falling back to a simulated face.
///
/// `None` means no detector was available. A detector result in which no
/// candidate survives the acceptance gate also falls back to simulation.
pub fn process(detections: Option<&[DetectionCandidate]>, seed: u64) -> Detection {
    let Some(candidates) = detections else {
        tracing::info!(seed, "no detector available, using simulated analysis");
        return Detection::simulated(seed);
    };

    let analyses = estimator::analyze_detections(candidates, seed);
    if analyses.is_empty() {
        tracing::info!(
            candidates = candidates.len(),
            seed,
            "no usable face detected, using simulated analysis"
        );
        return Detection::simulated(seed);
    }

    Detection {
        faces_detected: candidates.len(),
        analyses,
        simulated: false,
    }
}
