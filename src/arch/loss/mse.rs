use ndarray::ArrayView2;

use super::LossFn;

/// Computes the squared difference between two scalars.
pub fn sq_error(a: f64, b: f64) -> f64 {
    let diff = a - b;
    diff * diff
}

/// Mean squared error loss function.
///
/// # Panics
/// `loss` panics if `y_pred` and `y` have different shapes that cannot be broadcast together.
#[derive(Default, Clone, Copy, Debug)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView2<f64>, y: ArrayView2<f64>) -> f64 {
        (&y_pred - &y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default()
    }
}
