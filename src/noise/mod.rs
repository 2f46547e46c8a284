// src/noise/mod.rs

//! Illustrative noise perturbation for the noise labs.
//!
//! Not a physical channel model: an ideal probability is smeared by a
//! uniform distortion scaled to the configured noise level, then clamped
//! back into range. Good enough to show students why error correction
//! matters, and exactly what the labs displayed.

use crate::core::QulabError;
use rand::Rng;

/// A configured noise magnitude, as a percentage in `0..=100`.
///
/// Perturbation draws come from a caller-supplied random source so that
/// one page-level rng (or a seeded one in tests) serves every entry of a
/// distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseModel {
    level_percent: u8,
}

impl NoiseModel {
    /// Creates a model with the given noise level percentage.
    ///
    /// # Errors
    /// Returns `QulabError::InvalidConfiguration` for levels above 100.
    pub fn new(level_percent: u8) -> Result<Self, QulabError> {
        if level_percent > 100 {
            return Err(QulabError::InvalidConfiguration {
                message: format!("noise level {}% exceeds 100%", level_percent),
            });
        }
        Ok(Self { level_percent })
    }

    /// A noiseless model; [`NoiseModel::perturb`] becomes the identity.
    pub fn noiseless() -> Self {
        Self { level_percent: 0 }
    }

    /// The configured level percentage.
    pub fn level_percent(&self) -> u8 {
        self.level_percent
    }

    /// Perturbs an ideal probability percentage, clamped to `[0, 100]`.
    ///
    /// `result = clamp(ideal + (r − 0.5) · (level/100) · 100, 0, 100)`
    /// with one uniform draw `r` in `[0, 1)`. At level 0 the output
    /// equals the input exactly; at level 100 the distortion window is
    /// ±50 percentage points before clamping.
    pub fn perturb(&self, ideal_percent: f64, rng: &mut impl Rng) -> f64 {
        let noise_factor = self.level_percent as f64 / 100.0;
        let distortion = (rng.random::<f64>() - 0.5) * noise_factor * 100.0;
        (ideal_percent + distortion).clamp(0.0, 100.0)
    }

    /// Perturbs each entry of a probability vector (`[0, 1]` scale)
    /// independently: one draw per entry, each clamped to `[0, 1]`.
    ///
    /// The perturbed entries are *not* renormalized and need not sum
    /// to 1; the multi-qubit noise lab displays them as-is.
    pub fn perturb_distribution(&self, probs: &[f64], rng: &mut impl Rng) -> Vec<f64> {
        let noise_factor = self.level_percent as f64 / 100.0;
        probs
            .iter()
            .map(|&p| {
                let adjustment = (rng.random::<f64>() - 0.5) * noise_factor;
                (p + adjustment).clamp(0.0, 1.0)
            })
            .collect()
    }

    /// The noise lab's fidelity readout: `100 − |ideal − actual|`.
    /// A simplified deviation metric, not quantum fidelity.
    pub fn fidelity(ideal_percent: f64, actual_percent: f64) -> f64 {
        100.0 - (ideal_percent - actual_percent).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_level_zero_is_exact_identity() -> Result<(), QulabError> {
        let model = NoiseModel::new(0)?;
        let mut rng = StdRng::seed_from_u64(7);
        for ideal in [0.0, 13.37, 50.0, 99.999, 100.0] {
            assert_eq!(model.perturb(ideal, &mut rng), ideal);
        }
        Ok(())
    }

    #[test]
    fn test_rejects_level_above_100() {
        let err = NoiseModel::new(101).unwrap_err();
        assert!(matches!(err, QulabError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_perturbation_stays_bounded() -> Result<(), QulabError> {
        let mut rng = StdRng::seed_from_u64(99);
        for level in [0u8, 25, 50, 100] {
            let model = NoiseModel::new(level)?;
            for ideal in [0.0, 10.0, 50.0, 90.0, 100.0] {
                for _ in 0..200 {
                    let out = model.perturb(ideal, &mut rng);
                    assert!((0.0..=100.0).contains(&out), "out of range: {}", out);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_distribution_entries_bounded_not_renormalized() -> Result<(), QulabError> {
        let model = NoiseModel::new(100)?;
        let mut rng = StdRng::seed_from_u64(3);
        let base = [0.25, 0.25, 0.25, 0.25];
        for _ in 0..100 {
            let perturbed = model.perturb_distribution(&base, &mut rng);
            assert_eq!(perturbed.len(), 4);
            for p in &perturbed {
                assert!((0.0..=1.0).contains(p));
            }
        }
        Ok(())
    }

    #[test]
    fn test_fidelity_metric() {
        assert_eq!(NoiseModel::fidelity(50.0, 50.0), 100.0);
        assert_eq!(NoiseModel::fidelity(50.0, 38.0), 88.0);
        assert_eq!(NoiseModel::fidelity(38.0, 50.0), 88.0);
    }
}
