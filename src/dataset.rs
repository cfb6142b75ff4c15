use ndarray::{Array1, Array2, ArrayView2, Axis};
use rand::Rng;
use rand_distr::Normal;

use crate::{Result, SgdErr};

/// A labeled training set: one input vector per row of `x` and its label in the single column
/// of `y`.
#[derive(Debug, Clone)]
pub struct Dataset {
    x: Array2<f64>,
    y: Array2<f64>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The input vectors, one per row.
    /// * `y` - A column vector with one label per row of `x`.
    pub fn new(x: Array2<f64>, y: Array2<f64>) -> Result<Self> {
        if x.nrows() != y.nrows() {
            return Err(SgdErr::SizeMismatch {
                a: "x rows",
                b: "y rows",
                got: x.nrows(),
                expected: y.nrows(),
            });
        }

        if y.ncols() != 1 {
            return Err(SgdErr::ShapeMismatch {
                what: "y",
                got: y.ncols(),
                expected: 1,
            });
        }

        Ok(Self { x, y })
    }

    /// Samples `n` points of a noisy line: `x_i = i / n` and
    /// `y_i = slope * x_i + intercept + N(0, noise)`.
    pub fn linear<R: Rng>(
        n: usize,
        slope: f64,
        intercept: f64,
        noise: f64,
        rng: &mut R,
    ) -> Result<Self> {
        if !noise.is_finite() || noise < 0. {
            return Err(SgdErr::invalid_config(format!(
                "noise must be finite and non negative, got {noise}"
            )));
        }

        let normal = Normal::new(0., noise)
            .map_err(|e| SgdErr::invalid_config(format!("invalid noise {noise}: {e}")))?;

        let x = Array1::from_iter((0..n).map(|i| i as f64 / n as f64));
        let y = x.mapv(|x| slope * x + intercept + rng.sample(normal));

        Self::new(x.insert_axis(Axis(1)), y.insert_axis(Axis(1)))
    }

    pub fn x(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView2<'_, f64> {
        self.y.view()
    }

    /// Returns the amount of samples.
    pub fn len(&self) -> usize {
        self.x.nrows()
    }

    /// Returns the width of the input vectors.
    pub fn x_size(&self) -> usize {
        self.x.ncols()
    }
}
