use serde::{Deserialize, Serialize};

use crate::adm::error::{AdmError, invalid_config};
use crate::region::Vector;

/// Construction parameters of an ADM instance. `ideal` and `nadir`
/// bound the objective space (minimization, `ideal[i] <= nadir[i]`);
/// the coefficient of optimism blends a box's corners into its
/// representative point, `1.0` being fully optimistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmConfig {
    pub ideal: Vector,
    pub nadir: Vector,
    pub coefficient_of_optimism: f64,
}

impl AdmConfig {
    pub fn new(ideal: Vector, nadir: Vector, coefficient_of_optimism: f64) -> Self {
        Self {
            ideal,
            nadir,
            coefficient_of_optimism,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.ideal.len()
    }

    pub fn validate(&self) -> Result<(), AdmError> {
        if self.ideal.is_empty() {
            return Err(invalid_config("ideal point cannot be empty"));
        }
        if self.ideal.len() != self.nadir.len() {
            return Err(invalid_config(format!(
                "ideal has {} dimensions but nadir has {}",
                self.ideal.len(),
                self.nadir.len()
            )));
        }
        for (i, (lo, hi)) in self.ideal.iter().zip(&self.nadir).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(invalid_config(format!(
                    "ideal and nadir must be finite in dimension {i}"
                )));
            }
            if lo > hi {
                return Err(invalid_config(format!(
                    "ideal exceeds nadir in dimension {i}: {lo} > {hi}"
                )));
            }
        }
        let c = self.coefficient_of_optimism;
        if !(0.0..=1.0).contains(&c) {
            return Err(invalid_config(format!(
                "coefficient of optimism must lie in [0, 1], got {c}"
            )));
        }
        Ok(())
    }
}
