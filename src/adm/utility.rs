use crate::adm::error::{AdmError, utility_computation};
use crate::region::Vector;

/// Scalar utility of an objective vector relative to the ideal and
/// nadir points; higher is better. Implementations must surface
/// non-finite results as `UtilityComputation` errors instead of letting
/// NaN propagate into box scores.
pub trait UtilityFunction {
    fn evaluate(&self, y: &[f64], ideal: &[f64], nadir: &[f64]) -> Result<f64, AdmError>;
}

/// Linear normalization mapping ideal to 1 and nadir to 0, which turns
/// minimization objectives into maximization scores on `[0, 1]`.
pub fn normalize(y: &[f64], ideal: &[f64], nadir: &[f64]) -> Vector {
    y.iter()
        .zip(ideal.iter().zip(nadir))
        .map(|(x, (lo, hi))| (hi - x) / (hi - lo))
        .collect()
}

fn finite_or_error(value: f64, family: &str) -> Result<f64, AdmError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(utility_computation(format!(
            "{family} utility produced a non-finite value: {value}"
        )))
    }
}

/// CES utility based on power summation:
/// `(sum_i w_i * x_i^p)^(1/p)` over normalized objectives.
#[derive(Debug, Clone)]
pub struct CesSum {
    pub weights: Vector,
    pub exponent: f64,
}

impl UtilityFunction for CesSum {
    fn evaluate(&self, y: &[f64], ideal: &[f64], nadir: &[f64]) -> Result<f64, AdmError> {
        let x = normalize(y, ideal, nadir);
        let sum: f64 = x
            .iter()
            .zip(&self.weights)
            .map(|(xi, w)| w * xi.powf(self.exponent))
            .sum();
        finite_or_error(sum.powf(1.0 / self.exponent), "CES-sum")
    }
}

/// CES utility based on multiplication: `prod_i (x_i + 0.01)^w_i` over
/// normalized objectives. The small shift keeps a single zero component
/// from annihilating the product.
#[derive(Debug, Clone)]
pub struct CesProduct {
    pub weights: Vector,
}

impl UtilityFunction for CesProduct {
    fn evaluate(&self, y: &[f64], ideal: &[f64], nadir: &[f64]) -> Result<f64, AdmError> {
        let x = normalize(y, ideal, nadir);
        let product: f64 = x
            .iter()
            .zip(&self.weights)
            .map(|(xi, w)| (xi + 0.01).powf(*w))
            .product();
        finite_or_error(product, "CES-product")
    }
}

/// TOPSIS-style closeness to the ideal: `d_nis / (d_nis + d_pis)` with
/// weighted Euclidean distances to the nadir and ideal in normalized
/// space. A zero denominator is a `UtilityComputation` error.
#[derive(Debug, Clone)]
pub struct Topsis {
    pub weights: Vector,
}

impl UtilityFunction for Topsis {
    fn evaluate(&self, y: &[f64], ideal: &[f64], nadir: &[f64]) -> Result<f64, AdmError> {
        let x = normalize(y, ideal, nadir);
        let d_nis: f64 = x
            .iter()
            .zip(&self.weights)
            .map(|(xi, w)| (w * xi).powi(2))
            .sum::<f64>()
            .sqrt();
        let d_pis: f64 = x
            .iter()
            .zip(&self.weights)
            .map(|(xi, w)| (w * (1.0 - xi)).powi(2))
            .sum::<f64>()
            .sqrt();
        if d_nis + d_pis == 0.0 {
            return Err(utility_computation(
                "TOPSIS denominator is zero for this point and weight vector",
            ));
        }
        finite_or_error(d_nis / (d_nis + d_pis), "TOPSIS")
    }
}
